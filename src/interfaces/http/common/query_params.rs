//! First-value query parameter extractor
//!
//! `QueryParams` works like `axum::extract::Query`, but keeps every
//! `key=value` pair instead of deserializing into a struct. Repeated keys are
//! allowed and [`QueryParams::first`] returns the earliest value, so a query
//! string never causes an extractor rejection.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

/// Decoded query pairs in request order.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    /// First value given for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(QueryParams(pairs))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;

    async fn handler(params: QueryParams) -> String {
        params.first("name").unwrap_or("<none>").to_string()
    }

    async fn send(uri: &str) -> (StatusCode, String) {
        use tower::Service;
        let mut svc = Router::new().route("/test", get(handler)).into_service();
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn repeated_key_takes_first_value() {
        assert_eq!(
            send("/test?name=sa&name=sas").await,
            (StatusCode::OK, "sa".to_string())
        );
    }

    #[tokio::test]
    async fn values_are_percent_decoded() {
        assert_eq!(
            send("/test?name=Sa%20ra+da").await,
            (StatusCode::OK, "Sa ra da".to_string())
        );
    }

    #[tokio::test]
    async fn missing_key_and_missing_query() {
        assert_eq!(send("/test?other=1").await.1, "<none>");
        assert_eq!(send("/test").await.1, "<none>");
    }

    #[test]
    fn empty_value_is_present() {
        let params = QueryParams(vec![("page".to_string(), String::new())]);
        assert_eq!(params.first("page"), Some(""));
    }
}
