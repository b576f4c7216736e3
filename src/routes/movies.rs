use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{CastMember, Genre, Movie, MovieDetails, RegionProviders, Review, SavedItem},
    services::discover::DiscoverFilters,
    services::providers::{MovieListKind, TimeWindow},
    state::AppState,
};

/// How many reviews and similar titles a detail page carries
const REVIEWS_SHOWN: usize = 5;
const SIMILAR_SHOWN: usize = 12;

/// View model for the home page
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub popular: Vec<Movie>,
    pub top_rated: Vec<Movie>,
    pub recently_viewed: Vec<SavedItem>,
}

/// Home page: popular and top-rated rails plus the visitor's recency list
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomePage>> {
    let (popular, top_rated) = tokio::try_join!(
        state.provider.movie_list(MovieListKind::Popular, 1),
        state.provider.movie_list(MovieListKind::TopRated, 1),
    )?;

    Ok(Json(HomePage {
        popular: popular.into_results(),
        top_rated: top_rated.into_results(),
        recently_viewed: state.store.load_recently_viewed(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendingPage {
    pub window: &'static str,
    pub results: Vec<Movie>,
}

pub async fn trending(
    State(state): State<AppState>,
    Query(params): Query<TrendingQuery>,
) -> AppResult<Json<TrendingPage>> {
    let window = TimeWindow::parse(params.time.as_deref());
    let page = state.provider.trending_movies(window).await?;
    Ok(Json(TrendingPage {
        window: window.as_path(),
        results: page.into_results(),
    }))
}

#[derive(Debug, Serialize)]
pub struct DiscoverPage {
    pub results: Vec<Movie>,
    pub total_results: u32,
}

pub async fn discover(
    State(state): State<AppState>,
    Query(filters): Query<DiscoverFilters>,
) -> AppResult<Json<DiscoverPage>> {
    let page = state.provider.discover_movies(&filters).await?;
    Ok(Json(DiscoverPage {
        total_results: page.total_results,
        results: page.results,
    }))
}

pub async fn genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.provider.movie_genres().await?))
}

#[derive(Debug, Serialize)]
pub struct GenrePage {
    pub genre: Genre,
    pub results: Vec<Movie>,
}

/// Genre browse page: the genre's name plus its most popular titles
pub async fn genre(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<GenrePage>> {
    let filters = DiscoverFilters::for_genre(id);
    let (genres, page) = tokio::try_join!(
        state.provider.movie_genres(),
        state.provider.discover_movies(&filters),
    )?;

    let genre = genres
        .into_iter()
        .find(|g| g.id == id)
        .ok_or_else(|| AppError::NotFound(format!("No genre with id {id}")))?;

    Ok(Json(GenrePage {
        genre,
        results: page.into_results(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub region: Option<String>,
}

/// View model for the movie detail page
#[derive(Debug, Serialize)]
pub struct MoviePage {
    pub movie: MovieDetails,
    pub cast: Vec<CastMember>,
    pub reviews: Vec<Review>,
    pub watch_providers: Option<RegionProviders>,
    pub similar: Vec<Movie>,
}

/// Movie detail page. Viewing it records the movie in the visitor's
/// recently-viewed list.
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<DetailQuery>,
) -> AppResult<Json<MoviePage>> {
    let region = params.region.as_deref().unwrap_or("US");

    let (movie, credits, reviews, watch_providers, similar) = tokio::try_join!(
        state.provider.movie_details(id),
        state.provider.movie_credits(id),
        state.provider.movie_reviews(id),
        state.provider.movie_watch_providers(id, region),
        state.provider.similar_movies(id),
    )?;

    state.store.record_recently_viewed(SavedItem::from(&movie))?;

    let mut reviews = reviews.into_results();
    reviews.truncate(REVIEWS_SHOWN);
    let mut similar = similar.into_results();
    similar.truncate(SIMILAR_SHOWN);

    Ok(Json(MoviePage {
        movie,
        cast: credits.cast,
        reviews,
        watch_providers,
        similar,
    }))
}
