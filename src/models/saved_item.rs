use serde::{Deserialize, Serialize};

use super::{MovieDetails, TvDetails};

/// Minimal record identifying a trackable movie or show for the
/// personalization lists (watchlist, recently-viewed). This is the shape
/// persisted to durable storage, keyed uniquely by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedItem {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

impl From<&MovieDetails> for SavedItem {
    fn from(movie: &MovieDetails) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
        }
    }
}

impl From<&TvDetails> for SavedItem {
    fn from(show: &TvDetails) -> Self {
        Self {
            id: show.id,
            title: show.name.clone(),
            poster_path: show.poster_path.clone(),
            release_date: show.first_air_date.clone(),
            vote_average: show.vote_average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_item_roundtrips_storage_shape() {
        let item = SavedItem {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/p.jpg".to_string()),
            release_date: Some("1999-03-30".to_string()),
            vote_average: Some(8.2),
        };

        let json = serde_json::to_string(&item).unwrap();
        // Snake-case keys, matching the stored payloads the original app wrote
        assert!(json.contains("\"poster_path\""));
        let back: SavedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_saved_item_tolerates_sparse_fields() {
        let item: SavedItem =
            serde_json::from_str(r#"{"id": 1, "title": "A", "poster_path": null,
                                     "release_date": null, "vote_average": null}"#)
                .unwrap();
        assert_eq!(item.id, 1);
        assert!(item.poster_path.is_none());
    }
}
