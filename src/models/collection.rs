use serde::{Deserialize, Serialize};

use super::Movie;

/// Collection reference, as embedded in movie details and listed on the
/// collections index page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: u64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

/// Full collection record from GET /collection/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDetails {
    pub id: u64,
    pub name: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub parts: Vec<Movie>,
}

impl CollectionDetails {
    /// Parts ordered by release date, oldest first. Undated entries
    /// (unannounced sequels) sort to the end.
    pub fn sorted_parts(mut self) -> Vec<Movie> {
        self.parts.sort_by(|a, b| {
            let date_a = a.release_date.as_deref().filter(|d| !d.is_empty()).unwrap_or("9999");
            let date_b = b.release_date.as_deref().filter(|d| !d.is_empty()).unwrap_or("9999");
            date_a.cmp(date_b)
        });
        self.parts
    }
}
