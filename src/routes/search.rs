use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub results: Vec<Movie>,
}

/// Search results page
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchPage>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query must not be empty".to_string(),
        ));
    }

    let page = state
        .provider
        .search_movies(query, params.page.unwrap_or(1))
        .await?;

    Ok(Json(SearchPage {
        query: query.to_string(),
        page: page.page,
        total_pages: page.total_pages,
        total_results: page.total_results,
        results: page.results,
    }))
}
