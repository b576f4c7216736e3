use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod collections;
pub mod movies;
pub mod people;
pub mod search;
pub mod tv;
pub mod watchlist;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Page and watchlist routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(movies::home))
        .route("/movies/trending", get(movies::trending))
        .route("/movies/discover", get(movies::discover))
        .route("/movies/genres", get(movies::genres))
        .route("/movies/genre/:id", get(movies::genre))
        .route("/movies/:id", get(movies::details))
        .route("/search", get(search::search))
        .route("/tv", get(tv::landing))
        .route("/tv/:id", get(tv::details))
        .route("/people/:id", get(people::details))
        .route("/collections", get(collections::index))
        .route("/collections/:id", get(collections::details))
        .route("/watchlist", get(watchlist::list).delete(watchlist::clear))
        .route("/watchlist/toggle", post(watchlist::toggle))
        .route("/watchlist/contains/:id", get(watchlist::contains))
        .route("/watchlist/events", get(watchlist::events))
        .route("/recently-viewed", get(watchlist::recently_viewed))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
