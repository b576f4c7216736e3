use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::{
    error::AppResult,
    models::{MovieCredit, PersonDetails},
    services::credits::known_for,
    state::AppState,
};

/// View model for the person page
#[derive(Debug, Serialize)]
pub struct PersonPage {
    pub person: PersonDetails,
    pub known_for: Vec<MovieCredit>,
}

/// Person page: details plus the shaped filmography
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<PersonPage>> {
    let (person, credits) = tokio::try_join!(
        state.provider.person_details(id),
        state.provider.person_movie_credits(id),
    )?;

    Ok(Json(PersonPage {
        person,
        known_for: known_for(credits),
    }))
}
