use serde::{Deserialize, Serialize};

use super::Genre;

/// TV show list entry as returned by TMDB tv list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
}

/// Full show record from GET /tv/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub vote_average: Option<f64>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl TvDetails {
    /// First-air year, or None when the show has no announced date
    pub fn first_air_year(&self) -> Option<&str> {
        self.first_air_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_details_deserializes() {
        let show: TvDetails = serde_json::from_str(
            r#"{"id": 1396, "name": "Breaking Bad", "poster_path": "/p.jpg",
                "backdrop_path": "/b.jpg", "first_air_date": "2008-01-20",
                "last_air_date": "2013-09-29", "overview": "A chemistry teacher",
                "tagline": "Remember my name", "vote_average": 8.9,
                "number_of_seasons": 5, "number_of_episodes": 62,
                "genres": [{"id": 18, "name": "Drama"}]}"#,
        )
        .unwrap();
        assert_eq!(show.first_air_year(), Some("2008"));
        assert_eq!(show.number_of_seasons, Some(5));
    }
}
