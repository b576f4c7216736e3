use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User review from GET /movie/{id}/reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub author_details: AuthorDetails,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorDetails {
    pub rating: Option<f64>,
    pub avatar_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes_tmdb_timestamp() {
        let review: Review = serde_json::from_str(
            r#"{"id": "5f3d0a", "author": "moviefan",
                "author_details": {"rating": 9.0, "avatar_path": null},
                "content": "Loved it.", "created_at": "2021-06-23T15:58:08.000Z",
                "url": "https://www.themoviedb.org/review/5f3d0a"}"#,
        )
        .unwrap();
        assert_eq!(review.author, "moviefan");
        assert_eq!(review.author_details.rating, Some(9.0));
        assert_eq!(review.created_at.timestamp(), 1624463888);
    }

    #[test]
    fn test_review_without_author_details() {
        let review: Review = serde_json::from_str(
            r#"{"id": "a", "author": "anon", "content": "ok",
                "created_at": "2021-06-23T15:58:08.000Z", "url": null}"#,
        )
        .unwrap();
        assert!(review.author_details.rating.is_none());
    }
}
