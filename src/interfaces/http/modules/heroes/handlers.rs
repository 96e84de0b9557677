//! Hero REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::dto::{ListHeroesQuery, SearchHeroesQuery};
use crate::application::{PaginationService, SearchService};
use crate::interfaces::http::common::{page_response, search_response, ApiResponse, QueryParams};

/// Shared state for the hero routes
#[derive(Clone)]
pub struct HeroesState {
    pub pagination: Arc<PaginationService>,
    pub search: Arc<SearchService>,
}

/// List one page of heroes
///
/// Pages are 1-based. Without `page` the first page is returned.
#[utoipa::path(
    get,
    path = "/boruto/heroes",
    tag = "Heroes",
    params(ListHeroesQuery),
    responses(
        (status = 200, description = "Heroes on the requested page", body = ApiResponse),
        (status = 400, description = "Page is not a number", body = ApiResponse),
        (status = 404, description = "Page does not exist", body = ApiResponse)
    )
)]
pub async fn list_heroes(
    State(state): State<HeroesState>,
    params: QueryParams,
) -> (StatusCode, Json<ApiResponse>) {
    let query = ListHeroesQuery::from(params);
    let result = state.pagination.list_page(query.page.as_deref());
    if let Err(ref e) = result {
        info!("Hero page rejected: {}", e);
    }
    let (status, body) = page_response(result);
    (status, Json(body))
}

/// Search heroes by name
///
/// Case-insensitive substring match. An empty `name` yields an empty list.
#[utoipa::path(
    get,
    path = "/boruto/heroes/search",
    tag = "Heroes",
    params(SearchHeroesQuery),
    responses(
        (status = 200, description = "Matching heroes (possibly none)", body = ApiResponse)
    )
)]
pub async fn search_heroes(
    State(state): State<HeroesState>,
    params: QueryParams,
) -> (StatusCode, Json<ApiResponse>) {
    let query = SearchHeroesQuery::from(params);
    let heroes = state.search.search(query.name.as_deref());
    let (status, body) = search_response(heroes);
    (status, Json(body))
}
