//! Welcome page and catch-all 404

use axum::http::StatusCode;

pub const WELCOME_MESSAGE: &str = "Welcome to Boruto server";
pub const NOT_FOUND_MESSAGE: &str = "Page not found";

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Plain-text greeting", body = String))
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Fallback for every unmatched route (plain text, not the JSON envelope).
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}
