use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::{
    error::AppResult,
    models::{CollectionSummary, Movie},
    state::AppState,
};

/// Well-known franchise collections shown on the collections index
const CURATED_COLLECTIONS: &[u64] = &[
    131296, // Marvel Cinematic Universe
    10,     // Star Wars
    528,    // The Godfather
    2150,   // Shrek
    1241,   // Harry Potter
    119,    // The Lord of the Rings
    87359,  // Mission: Impossible
    748,    // X-Men
    9485,   // The Fast and the Furious
    86311,  // The Avengers
    263,    // The Dark Knight
    328,    // Jurassic Park
    2344,   // The Matrix
    1570,   // Die Hard
    8091,   // Alien
    8650,   // Transformers
];

/// Collections index: every curated franchise fetched in parallel. A
/// collection that fails to load is skipped, not fatal to the page.
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<CollectionSummary>>> {
    let mut tasks = Vec::new();
    for &id in CURATED_COLLECTIONS {
        let provider = state.provider.clone();
        tasks.push(tokio::spawn(
            async move { provider.collection_details(id).await },
        ));
    }

    let mut collections = Vec::new();
    for task in tasks {
        match task.await {
            Ok(Ok(details)) => collections.push(CollectionSummary {
                id: details.id,
                name: details.name,
                poster_path: details.poster_path,
                backdrop_path: details.backdrop_path,
            }),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Skipping collection that failed to load");
            }
            Err(e) => {
                tracing::error!(error = %e, "Task join error");
            }
        }
    }

    Ok(Json(collections))
}

/// View model for one collection's page
#[derive(Debug, Serialize)]
pub struct CollectionPage {
    pub id: u64,
    pub name: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// Parts in release order, undated entries last
    pub parts: Vec<Movie>,
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<CollectionPage>> {
    let collection = state.provider.collection_details(id).await?;

    Ok(Json(CollectionPage {
        id: collection.id,
        name: collection.name.clone(),
        overview: collection.overview.clone(),
        poster_path: collection.poster_path.clone(),
        backdrop_path: collection.backdrop_path.clone(),
        parts: collection.sorted_parts(),
    }))
}
