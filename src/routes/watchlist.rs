use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use serde::Serialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::{
    error::AppResult, models::SavedItem, state::AppState, watchstate::ToggleOutcome,
};

/// The watchlist, newest addition first
pub async fn list(State(state): State<AppState>) -> Json<Vec<SavedItem>> {
    Json(state.store.load_watchlist())
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: u64,
    pub outcome: ToggleOutcome,
    pub in_watchlist: bool,
}

/// Adds the item if absent, removes it if present. The only mutation entry
/// point the UI uses for watchlist membership.
pub async fn toggle(
    State(state): State<AppState>,
    Json(item): Json<SavedItem>,
) -> AppResult<Json<ToggleResponse>> {
    let id = item.id;
    let outcome = state.store.toggle_watchlist(item)?;
    Ok(Json(ToggleResponse {
        id,
        outcome,
        in_watchlist: outcome == ToggleOutcome::Added,
    }))
}

pub async fn clear(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.store.clear_watchlist()?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct ContainsResponse {
    pub id: u64,
    pub in_watchlist: bool,
}

/// Membership check, used to render toggle affordances
pub async fn contains(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ContainsResponse> {
    Json(ContainsResponse {
        id,
        in_watchlist: state.store.is_in_watchlist(id),
    })
}

/// The recently-viewed list, newest view first
pub async fn recently_viewed(State(state): State<AppState>) -> Json<Vec<SavedItem>> {
    Json(state.store.load_recently_viewed())
}

/// Store notification stream. A connected client holds a subscription for
/// the lifetime of the connection; disconnecting drops the receiver and
/// unsubscribes. Events carry no payload; observers re-read the lists.
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.store.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => Some(Ok::<_, Infallible>(
            Event::default().event(event.as_str()).data(""),
        )),
        // A lagged receiver only misses intermediate notifications; it
        // re-reads the full lists on the next event anyway
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
