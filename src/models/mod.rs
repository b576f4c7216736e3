use serde::{Deserialize, Serialize};

mod collection;
mod movie;
mod person;
mod review;
mod saved_item;
mod tv;
mod watch_providers;

pub use collection::{CollectionDetails, CollectionSummary};
pub use movie::{Genre, Movie, MovieDetails};
pub use person::{CastMember, Credits, CrewMember, MovieCredit, PersonCredits, PersonDetails};
pub use review::{AuthorDetails, Review};
pub use saved_item::SavedItem;
pub use tv::{TvDetails, TvShow};
pub use watch_providers::{RegionProviders, WatchProvider, WatchProvidersResponse};

/// Paged response wrapper used by every TMDB list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Page<T> {
    /// Returns the results, consuming the page wrapper
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
