//! Response envelope and outcome mapping
//!
//! Every hero endpoint answers with the same [`ApiResponse`] envelope. The
//! functions in this module decide the status code and envelope contents for
//! each engine outcome.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Hero, PaginationError, PaginationResult};
use crate::interfaces::http::modules::heroes::dto::HeroDto;
use crate::shared::Page;

pub const MESSAGE_OK: &str = "OK";
pub const MESSAGE_INVALID_PAGE: &str = "Only numbers allowed";
pub const MESSAGE_HEROES_NOT_FOUND: &str = "Heroes not found";

/// Standard hero API envelope
///
/// Success: `{"success": true, "message": "OK", "prevPage": 1, "nextPage": 3, "heroes": [...], "lastUpdated": 1700000000000}`,
/// error: `{"success": false, "message": "Only numbers allowed", "prevPage": null, "nextPage": null, "heroes": [], ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// `true` if the request succeeded
    pub success: bool,
    /// `OK` on success, otherwise the failure reason
    pub message: String,
    /// Previous page number, `null` on the first page and for search results
    #[serde(default)]
    pub prev_page: Option<u32>,
    /// Next page number, `null` on the last page and for search results
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub heroes: Vec<HeroDto>,
    /// Generation time in epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub last_updated: DateTime<Utc>,
}

impl ApiResponse {
    pub fn page(page: Page<Hero>) -> Self {
        Self {
            success: true,
            message: MESSAGE_OK.to_string(),
            prev_page: page.prev_page(),
            next_page: page.next_page(),
            heroes: page.items.into_iter().map(Into::into).collect(),
            last_updated: Utc::now(),
        }
    }

    pub fn heroes(heroes: Vec<Hero>) -> Self {
        Self {
            success: true,
            message: MESSAGE_OK.to_string(),
            prev_page: None,
            next_page: None,
            heroes: heroes.into_iter().map(Into::into).collect(),
            last_updated: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            prev_page: None,
            next_page: None,
            heroes: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

// `last_updated` differs between any two envelopes built at different times.
impl PartialEq for ApiResponse {
    fn eq(&self, other: &Self) -> bool {
        self.success == other.success
            && self.message == other.message
            && self.prev_page == other.prev_page
            && self.next_page == other.next_page
            && self.heroes == other.heroes
    }
}

/// Status code and client-facing message for a pagination failure.
pub fn pagination_error_status(err: &PaginationError) -> (StatusCode, &'static str) {
    match err {
        PaginationError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, MESSAGE_INVALID_PAGE),
        PaginationError::PageNotFound { .. } => (StatusCode::NOT_FOUND, MESSAGE_HEROES_NOT_FOUND),
    }
}

/// Map a page lookup to its HTTP status and envelope.
pub fn page_response(result: PaginationResult<Page<Hero>>) -> (StatusCode, ApiResponse) {
    match result {
        Ok(page) => (StatusCode::OK, ApiResponse::page(page)),
        Err(err) => {
            let (status, message) = pagination_error_status(&err);
            (status, ApiResponse::error(message))
        }
    }
}

/// Search never fails: any result, including none, is a 200.
pub fn search_response(heroes: Vec<Hero>) -> (StatusCode, ApiResponse) {
    (StatusCode::OK, ApiResponse::heroes(heroes))
}
