use serde::{Deserialize, Serialize};

/// Cast entry from GET /movie/{id}/credits and /tv/{id}/credits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
}

/// Crew entry from the same credits payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: Option<String>,
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Full person record from GET /person/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetails {
    pub id: u64,
    pub name: String,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
}

/// A movie the person was credited on, from GET /person/{id}/movie_credits.
/// Cast entries carry `character`, crew entries carry `job`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCredit {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub character: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCredits {
    #[serde(default)]
    pub cast: Vec<MovieCredit>,
    #[serde(default)]
    pub crew: Vec<MovieCredit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_default_to_empty() {
        let credits: Credits = serde_json::from_str(r#"{"id": 27205}"#).unwrap();
        assert!(credits.cast.is_empty());
        assert!(credits.crew.is_empty());
    }

    #[test]
    fn test_movie_credit_cast_and_crew_shapes() {
        let cast: MovieCredit = serde_json::from_str(
            r#"{"id": 27205, "title": "Inception", "poster_path": "/p.jpg",
                "release_date": "2010-07-15", "vote_average": 8.4,
                "character": "Cobb"}"#,
        )
        .unwrap();
        assert_eq!(cast.character.as_deref(), Some("Cobb"));
        assert!(cast.job.is_none());

        let crew: MovieCredit = serde_json::from_str(
            r#"{"id": 27205, "title": "Inception", "poster_path": null,
                "release_date": "2010-07-15", "vote_average": 8.4,
                "job": "Director"}"#,
        )
        .unwrap();
        assert_eq!(crew.job.as_deref(), Some("Director"));
    }
}
