//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{PaginationService, SearchService};
use crate::config::AppConfig;
use crate::domain::HeroRepository;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::health::{self, HealthResponse, HealthState};
use crate::interfaces::http::modules::heroes::{self, dto::HeroDto, HeroesState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::root;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::welcome,
        health::health_check,
        heroes::list_heroes,
        heroes::search_heroes,
    ),
    components(schemas(ApiResponse, HeroDto, HealthResponse)),
    tags(
        (name = "Heroes", description = "Paged listing and name search of the hero catalog"),
        (name = "Health", description = "Server health check endpoints"),
    ),
    info(
        title = "Boruto Heroes API",
        version = "1.0.0",
        description = "Read-only REST API over a fixed catalog of Boruto heroes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// Hero endpoints are mounted under both `/boruto/heroes` and `/heroes`.
/// `prometheus_handle` is only used when `http.enable_metrics` is set.
pub fn create_api_router(
    repository: Arc<dyn HeroRepository>,
    config: &AppConfig,
    prometheus_handle: Option<PrometheusHandle>,
) -> Router {
    let heroes_state = HeroesState {
        pagination: Arc::new(PaginationService::new(repository.clone())),
        search: Arc::new(SearchService::new(repository.clone())),
    };

    let hero_routes = Router::new()
        .route("/boruto/heroes", get(heroes::list_heroes))
        .route("/boruto/heroes/search", get(heroes::search_heroes))
        .route("/heroes", get(heroes::list_heroes))
        .route("/heroes/search", get(heroes::search_heroes))
        .with_state(heroes_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            repository,
            started_at: Arc::new(Instant::now()),
        });

    let images = ServeDir::new(&config.http.images_dir)
        .not_found_service(root::not_found.into_service());

    let mut app = Router::new()
        .route("/", get(root::welcome))
        .merge(hero_routes)
        .merge(health_routes)
        .nest_service("/images", images)
        .fallback(root::not_found);

    if config.http.enable_docs {
        app = app.merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }

    if config.http.enable_metrics {
        if let Some(handle) = prometheus_handle {
            app = app.route(
                "/metrics",
                get(prometheus_metrics).with_state(MetricsState { handle }),
            );
        }
        app = app.layer(middleware::from_fn(http_metrics_middleware));
    }

    let cache_control = HeaderValue::from_str(&config.http.cache_control())
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        cache_control,
    ))
    .layer(middleware::from_fn(request_id_middleware))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};

    use crate::infrastructure::storage::InMemoryHeroRepository;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    fn repository() -> Arc<InMemoryHeroRepository> {
        Arc::new(InMemoryHeroRepository::default())
    }

    fn app() -> Router {
        let mut config = AppConfig::default();
        config.http.images_dir = std::env::temp_dir().join("heroes-test-images-missing");
        create_api_router(repository(), &config, None)
    }

    async fn get(uri: &str) -> Response<Body> {
        use tower::Service;
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    async fn body_text(resp: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn envelope(resp: Response<Body>) -> ApiResponse {
        serde_json::from_str(&body_text(resp).await).unwrap()
    }

    fn expected_page(number: u32) -> ApiResponse {
        let repo = repository();
        let heroes = repo.find_page(number).unwrap().to_vec();
        ApiResponse::page(crate::shared::Page::new(heroes, number, repo.total_pages()))
    }

    #[tokio::test]
    async fn root_returns_welcome_text() {
        let resp = get("/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "Welcome to Boruto server");
    }

    #[tokio::test]
    async fn heroes_without_page_returns_first_page() {
        let resp = get("/boruto/heroes").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = envelope(resp).await;
        assert_eq!(body, expected_page(1));
        assert_eq!(body.prev_page, None);
        assert_eq!(body.next_page, Some(2));
    }

    #[tokio::test]
    async fn heroes_second_page() {
        let resp = get("/boruto/heroes?page=2").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = envelope(resp).await;
        assert_eq!(body, expected_page(2));
        assert_eq!(body.prev_page, Some(1));
        assert_eq!(body.next_page, Some(3));
    }

    #[tokio::test]
    async fn every_page_has_correct_cursors() {
        for page in 1..=5u32 {
            let resp = get(&format!("/heroes?page={}", page)).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body = envelope(resp).await;
            assert_eq!(body, expected_page(page));
            assert_eq!(body.prev_page, (page > 1).then(|| page - 1));
            assert_eq!(body.next_page, (page < 5).then(|| page + 1));
        }
    }

    #[tokio::test]
    async fn non_numeric_page_is_400() {
        let resp = get("/boruto/heroes?page=nan").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope(resp).await, ApiResponse::error("Only numbers allowed"));
    }

    #[tokio::test]
    async fn page_past_the_end_is_404() {
        let resp = get("/boruto/heroes?page=6").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(envelope(resp).await, ApiResponse::error("Heroes not found"));
    }

    #[tokio::test]
    async fn search_counts() {
        for (query, expected) in [("sas", 1), ("sa", 3), ("SA", 3), ("nan", 0), ("", 0)] {
            let resp = get(&format!("/boruto/heroes/search?name={}", query)).await;
            assert_eq!(resp.status(), StatusCode::OK, "query {query:?}");

            let body = envelope(resp).await;
            assert!(body.success);
            assert_eq!(body.message, "OK");
            assert_eq!(body.heroes.len(), expected, "query {query:?}");
            assert_eq!((body.prev_page, body.next_page), (None, None));
        }
    }

    #[tokio::test]
    async fn repeated_page_uses_first_value() {
        let resp = get("/boruto/heroes?page=1&page=2").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(envelope(resp).await, expected_page(1));

        let resp = get("/boruto/heroes?page=nan&page=2").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope(resp).await, ApiResponse::error("Only numbers allowed"));
    }

    #[tokio::test]
    async fn repeated_name_uses_first_value() {
        let resp = get("/boruto/heroes/search?name=sa&name=sas").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = envelope(resp).await;
        assert!(body.success);
        assert_eq!(body.heroes.len(), 3);
    }

    #[tokio::test]
    async fn search_without_name_is_empty() {
        let resp = get("/heroes/search").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(envelope(resp).await.heroes.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_plain_text_404() {
        let resp = get("/unknown").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(resp).await, "Page not found");
    }

    #[tokio::test]
    async fn missing_image_is_plain_text_404() {
        let resp = get("/images/nobody.jpg").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(resp).await, "Page not found");
    }

    #[tokio::test]
    async fn responses_carry_cache_control() {
        let resp = get("/boruto/heroes").await;
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=31536000, immutable"
        );
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        use tower::Service;

        let resp = get("/").await;
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

        let req = Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = app().into_service().call(req).await.unwrap();
        assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let resp = get("/health").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["heroes"], 25);
        assert_eq!(json["pages"], 5);
    }

    #[test]
    fn openapi_lists_hero_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/boruto/heroes"));
        assert!(doc.paths.paths.contains_key("/boruto/heroes/search"));
    }
}
