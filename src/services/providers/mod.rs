/// Catalog data provider abstraction
///
/// The seam between HTTP routing and the metadata source. Handlers depend
/// on this trait only, so tests can swap in a canned provider and another
/// metadata backend could be slotted in without touching the routes.
use crate::{
    error::AppResult,
    models::{
        CollectionDetails, Credits, Genre, Movie, MovieDetails, Page, PersonCredits,
        PersonDetails, RegionProviders, Review, TvDetails, TvShow,
    },
    services::discover::DiscoverFilters,
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Curated movie rails on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieListKind {
    Popular,
    TopRated,
}

impl MovieListKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            MovieListKind::Popular => "popular",
            MovieListKind::TopRated => "top_rated",
        }
    }
}

/// TV rails on the shows landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvListKind {
    AiringToday,
    Popular,
    TopRated,
    OnTheAir,
}

impl TvListKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            TvListKind::AiringToday => "airing_today",
            TvListKind::Popular => "popular",
            TvListKind::TopRated => "top_rated",
            TvListKind::OnTheAir => "on_the_air",
        }
    }
}

/// Trending window; anything other than an explicit "week" means "day"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    Day,
    Week,
}

impl TimeWindow {
    pub fn as_path(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }

    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("week") => TimeWindow::Week,
            _ => TimeWindow::Day,
        }
    }
}

/// Trait for catalog metadata providers
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn movie_list(&self, kind: MovieListKind, page: u32) -> AppResult<Page<Movie>>;

    async fn trending_movies(&self, window: TimeWindow) -> AppResult<Page<Movie>>;

    async fn discover_movies(&self, filters: &DiscoverFilters) -> AppResult<Page<Movie>>;

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Page<Movie>>;

    async fn movie_genres(&self) -> AppResult<Vec<Genre>>;

    async fn movie_details(&self, id: u64) -> AppResult<MovieDetails>;

    async fn movie_credits(&self, id: u64) -> AppResult<Credits>;

    async fn movie_reviews(&self, id: u64) -> AppResult<Page<Review>>;

    /// Watch options for one region, or None when TMDB lists none there
    async fn movie_watch_providers(
        &self,
        id: u64,
        region: &str,
    ) -> AppResult<Option<RegionProviders>>;

    async fn similar_movies(&self, id: u64) -> AppResult<Page<Movie>>;

    async fn tv_list(&self, kind: TvListKind) -> AppResult<Page<TvShow>>;

    async fn tv_details(&self, id: u64) -> AppResult<TvDetails>;

    async fn tv_credits(&self, id: u64) -> AppResult<Credits>;

    async fn similar_tv(&self, id: u64) -> AppResult<Page<TvShow>>;

    async fn person_details(&self, id: u64) -> AppResult<PersonDetails>;

    async fn person_movie_credits(&self, id: u64) -> AppResult<PersonCredits>;

    async fn collection_details(&self, id: u64) -> AppResult<CollectionDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_parse() {
        assert_eq!(TimeWindow::parse(Some("week")), TimeWindow::Week);
        assert_eq!(TimeWindow::parse(Some("day")), TimeWindow::Day);
        assert_eq!(TimeWindow::parse(Some("fortnight")), TimeWindow::Day);
        assert_eq!(TimeWindow::parse(None), TimeWindow::Day);
    }

    #[test]
    fn test_list_kind_paths() {
        assert_eq!(MovieListKind::TopRated.as_path(), "top_rated");
        assert_eq!(TvListKind::AiringToday.as_path(), "airing_today");
        assert_eq!(TvListKind::OnTheAir.as_path(), "on_the_air");
    }
}
