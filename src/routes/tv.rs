use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::{
    error::AppResult,
    models::{CastMember, SavedItem, TvDetails, TvShow},
    services::providers::TvListKind,
    state::AppState,
};

/// Each rail on the TV landing page shows at most this many entries
const RAIL_SHOWN: usize = 12;
const SIMILAR_SHOWN: usize = 12;

/// View model for the TV landing page
#[derive(Debug, Serialize)]
pub struct TvLandingPage {
    pub airing_today: Vec<TvShow>,
    pub popular: Vec<TvShow>,
    pub on_the_air: Vec<TvShow>,
    pub top_rated: Vec<TvShow>,
}

/// TV landing page: four rails fetched in parallel
pub async fn landing(State(state): State<AppState>) -> AppResult<Json<TvLandingPage>> {
    let (airing_today, popular, top_rated, on_the_air) = tokio::try_join!(
        state.provider.tv_list(TvListKind::AiringToday),
        state.provider.tv_list(TvListKind::Popular),
        state.provider.tv_list(TvListKind::TopRated),
        state.provider.tv_list(TvListKind::OnTheAir),
    )?;

    let rail = |page: crate::models::Page<TvShow>| {
        let mut shows = page.into_results();
        shows.truncate(RAIL_SHOWN);
        shows
    };

    Ok(Json(TvLandingPage {
        airing_today: rail(airing_today),
        popular: rail(popular),
        on_the_air: rail(on_the_air),
        top_rated: rail(top_rated),
    }))
}

/// View model for the show detail page
#[derive(Debug, Serialize)]
pub struct TvPage {
    pub show: TvDetails,
    pub cast: Vec<CastMember>,
    pub similar: Vec<TvShow>,
}

/// Show detail page. Viewing it records the show in the visitor's
/// recently-viewed list.
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<TvPage>> {
    let (show, credits, similar) = tokio::try_join!(
        state.provider.tv_details(id),
        state.provider.tv_credits(id),
        state.provider.similar_tv(id),
    )?;

    state.store.record_recently_viewed(SavedItem::from(&show))?;

    let mut similar = similar.into_results();
    similar.truncate(SIMILAR_SHOWN);

    Ok(Json(TvPage {
        show,
        cast: credits.cast,
        similar,
    }))
}
