/// TMDB API provider
///
/// Thin reqwest client over the TMDB v3 REST API using bearer-token auth.
/// Every page route ultimately funnels through [`TmdbProvider::get`], which
/// maps non-success statuses onto the app error taxonomy.
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{
        CollectionDetails, Credits, Genre, Movie, MovieDetails, Page, PersonCredits,
        PersonDetails, RegionProviders, Review, TvDetails, TvShow, WatchProvidersResponse,
    },
    services::discover::DiscoverFilters,
    services::providers::{CatalogProvider, MovieListKind, TimeWindow, TvListKind},
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    token: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

impl TmdbProvider {
    pub fn new(token: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            token,
            api_url,
        }
    }

    /// Issues a GET against the TMDB API and decodes the JSON body
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        tracing::debug!(path, "Fetching from TMDB");
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("TMDB has no record at {path}")));
        }
        if !status.is_success() {
            tracing::error!(%status, path, "TMDB request failed");
            return Err(AppError::ExternalApi(format!(
                "TMDB returned {status} for {path}"
            )));
        }

        Ok(response.json::<T>().await?)
    }

    fn page_query(page: u32) -> Vec<(String, String)> {
        vec![("page".to_string(), page.to_string())]
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn movie_list(&self, kind: MovieListKind, page: u32) -> AppResult<Page<Movie>> {
        self.get(&format!("/movie/{}", kind.as_path()), &Self::page_query(page))
            .await
    }

    async fn trending_movies(&self, window: TimeWindow) -> AppResult<Page<Movie>> {
        self.get(&format!("/trending/movie/{}", window.as_path()), &[])
            .await
    }

    async fn discover_movies(&self, filters: &DiscoverFilters) -> AppResult<Page<Movie>> {
        self.get("/discover/movie", &filters.to_query()).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Page<Movie>> {
        let mut params = Self::page_query(page);
        params.push(("query".to_string(), query.to_string()));
        self.get("/search/movie", &params).await
    }

    async fn movie_genres(&self) -> AppResult<Vec<Genre>> {
        let response: GenreListResponse = self.get("/genre/movie/list", &[]).await?;
        Ok(response.genres)
    }

    async fn movie_details(&self, id: u64) -> AppResult<MovieDetails> {
        self.get(&format!("/movie/{id}"), &[]).await
    }

    async fn movie_credits(&self, id: u64) -> AppResult<Credits> {
        self.get(&format!("/movie/{id}/credits"), &[]).await
    }

    async fn movie_reviews(&self, id: u64) -> AppResult<Page<Review>> {
        self.get(&format!("/movie/{id}/reviews"), &[]).await
    }

    async fn movie_watch_providers(
        &self,
        id: u64,
        region: &str,
    ) -> AppResult<Option<RegionProviders>> {
        let response: WatchProvidersResponse =
            self.get(&format!("/movie/{id}/watch/providers"), &[]).await?;
        Ok(response.into_region(region).filter(|r| !r.is_empty()))
    }

    async fn similar_movies(&self, id: u64) -> AppResult<Page<Movie>> {
        self.get(&format!("/movie/{id}/similar"), &[]).await
    }

    async fn tv_list(&self, kind: TvListKind) -> AppResult<Page<TvShow>> {
        self.get(&format!("/tv/{}", kind.as_path()), &[]).await
    }

    async fn tv_details(&self, id: u64) -> AppResult<TvDetails> {
        self.get(&format!("/tv/{id}"), &[]).await
    }

    async fn tv_credits(&self, id: u64) -> AppResult<Credits> {
        self.get(&format!("/tv/{id}/credits"), &[]).await
    }

    async fn similar_tv(&self, id: u64) -> AppResult<Page<TvShow>> {
        self.get(&format!("/tv/{id}/similar"), &[]).await
    }

    async fn person_details(&self, id: u64) -> AppResult<PersonDetails> {
        self.get(&format!("/person/{id}"), &[]).await
    }

    async fn person_movie_credits(&self, id: u64) -> AppResult<PersonCredits> {
        self.get(&format!("/person/{id}/movie_credits"), &[]).await
    }

    async fn collection_details(&self, id: u64) -> AppResult<CollectionDetails> {
        self.get(&format!("/collection/{id}"), &[]).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
