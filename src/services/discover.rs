use serde::Deserialize;

/// User-facing sort options on the discover page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Popular,
    Rating,
    Newest,
    Oldest,
}

// Unrecognized sort values fall back to the popularity default instead of
// rejecting the request, matching the page's behavior
impl<'de> Deserialize<'de> for SortOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "rating" => SortOption::Rating,
            "newest" => SortOption::Newest,
            "oldest" => SortOption::Oldest,
            _ => SortOption::Popular,
        })
    }
}

impl SortOption {
    /// The TMDB `sort_by` value for this option
    pub fn as_tmdb_sort(&self) -> &'static str {
        match self {
            SortOption::Popular => "popularity.desc",
            SortOption::Rating => "vote_average.desc",
            SortOption::Newest => "primary_release_date.desc",
            SortOption::Oldest => "primary_release_date.asc",
        }
    }
}

/// Filters accepted by the discover page, also used for genre browsing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverFilters {
    pub year: Option<u16>,
    /// Minimum vote average, e.g. 7 means "7+"
    pub rating: Option<f32>,
    /// ISO 639-1 original-language code
    pub language: Option<String>,
    pub genre: Option<u64>,
    #[serde(default)]
    pub sort: SortOption,
}

impl DiscoverFilters {
    pub fn for_genre(genre_id: u64) -> Self {
        Self {
            genre: Some(genre_id),
            ..Default::default()
        }
    }

    /// Builds the TMDB /discover/movie query pairs. Low-vote noise is always
    /// filtered out with a vote count floor.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(year) = self.year {
            query.push(("primary_release_year".to_string(), year.to_string()));
        }
        if let Some(rating) = self.rating {
            query.push(("vote_average.gte".to_string(), rating.to_string()));
        }
        if let Some(language) = &self.language {
            query.push(("with_original_language".to_string(), language.clone()));
        }
        if let Some(genre) = self.genre {
            query.push(("with_genres".to_string(), genre.to_string()));
        }
        query.push(("sort_by".to_string(), self.sort.as_tmdb_sort().to_string()));
        query.push(("vote_count.gte".to_string(), "100".to_string()));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_default_filters_query() {
        let query = DiscoverFilters::default().to_query();
        assert_eq!(pair(&query, "sort_by"), Some("popularity.desc"));
        assert_eq!(pair(&query, "vote_count.gte"), Some("100"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_full_filters_query() {
        let filters = DiscoverFilters {
            year: Some(2019),
            rating: Some(7.0),
            language: Some("ko".to_string()),
            genre: Some(27),
            sort: SortOption::Rating,
        };
        let query = filters.to_query();
        assert_eq!(pair(&query, "primary_release_year"), Some("2019"));
        assert_eq!(pair(&query, "vote_average.gte"), Some("7"));
        assert_eq!(pair(&query, "with_original_language"), Some("ko"));
        assert_eq!(pair(&query, "with_genres"), Some("27"));
        assert_eq!(pair(&query, "sort_by"), Some("vote_average.desc"));
    }

    #[test]
    fn test_sort_mapping() {
        assert_eq!(SortOption::Newest.as_tmdb_sort(), "primary_release_date.desc");
        assert_eq!(SortOption::Oldest.as_tmdb_sort(), "primary_release_date.asc");
    }

    #[test]
    fn test_unknown_sort_falls_back_to_popular() {
        let filters: DiscoverFilters = serde_json::from_str(r#"{"sort": "sideways"}"#).unwrap();
        assert_eq!(filters.sort, SortOption::Popular);

        let filters: DiscoverFilters = serde_json::from_str(r#"{"sort": "newest"}"#).unwrap();
        assert_eq!(filters.sort, SortOption::Newest);
    }

    #[test]
    fn test_for_genre() {
        let query = DiscoverFilters::for_genre(18).to_query();
        assert_eq!(pair(&query, "with_genres"), Some("18"));
        assert_eq!(pair(&query, "sort_by"), Some("popularity.desc"));
    }
}
