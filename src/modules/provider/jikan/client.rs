use async_trait::async_trait;

use crate::modules::anime::{Anime, CharacterRole, Genre, RecommendationEntry};
use crate::modules::browse::BrowseConfig;
use crate::modules::provider::http_client::HttpClient;
use crate::modules::provider::traits::CatalogProvider;
use crate::modules::query::{RequestDescriptor, Season};
use crate::shared::errors::AppResult;

use super::dto::{
    JikanAnime, JikanCharacterEntry, JikanNamedEntity, JikanRecommendationEntry, JikanResponse,
};
use super::mapper::JikanMapper;

/// Typed client for the Jikan v4 REST API.
pub struct JikanClient {
    http: HttpClient,
    base_url: String,
}

impl JikanClient {
    pub fn new(config: &BrowseConfig) -> AppResult<Self> {
        let http = HttpClient::new(
            config.requests_per_second,
            config.burst,
            config.timeout_secs,
            &config.user_agent,
        )?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_anime_list(&self, url: &str, query: &[(String, String)]) -> AppResult<Vec<Anime>> {
        let response: JikanResponse<Vec<JikanAnime>> = self.http.get_json(url, query).await?;
        Ok(response.data.into_iter().map(JikanMapper::to_anime).collect())
    }
}

#[async_trait]
impl CatalogProvider for JikanClient {
    async fn search_anime(&self, descriptor: &RequestDescriptor) -> AppResult<Vec<Anime>> {
        let url = format!("{}/anime", self.base_url);
        self.get_anime_list(&url, &descriptor.params).await
    }

    async fn top_anime(&self, limit: usize) -> AppResult<Vec<Anime>> {
        let url = format!("{}/top/anime", self.base_url);
        let query = [("limit".to_string(), limit.to_string())];
        self.get_anime_list(&url, &query).await
    }

    async fn seasonal_anime(
        &self,
        year: i32,
        season: Season,
        limit: usize,
    ) -> AppResult<Vec<Anime>> {
        let url = format!("{}/seasons/{}/{}", self.base_url, year, season.as_str());
        let query = [("limit".to_string(), limit.to_string())];
        self.get_anime_list(&url, &query).await
    }

    async fn genre_taxonomy(&self) -> AppResult<Vec<Genre>> {
        let url = format!("{}/genres/anime", self.base_url);
        let response: JikanResponse<Vec<JikanNamedEntity>> = self.http.get_json(&url, &[]).await?;
        Ok(response.data.into_iter().map(JikanMapper::to_genre).collect())
    }

    async fn anime_by_id(&self, mal_id: i64) -> AppResult<Anime> {
        let url = format!("{}/anime/{}", self.base_url, mal_id);
        let response: JikanResponse<JikanAnime> = self.http.get_json(&url, &[]).await?;
        Ok(JikanMapper::to_anime(response.data))
    }

    async fn anime_characters(&self, mal_id: i64) -> AppResult<Vec<CharacterRole>> {
        let url = format!("{}/anime/{}/characters", self.base_url, mal_id);
        let response: JikanResponse<Vec<JikanCharacterEntry>> =
            self.http.get_json(&url, &[]).await?;
        Ok(response
            .data
            .into_iter()
            .map(JikanMapper::to_character)
            .collect())
    }

    async fn anime_recommendations(&self, mal_id: i64) -> AppResult<Vec<RecommendationEntry>> {
        let url = format!("{}/anime/{}/recommendations", self.base_url, mal_id);
        let response: JikanResponse<Vec<JikanRecommendationEntry>> =
            self.http.get_json(&url, &[]).await?;
        Ok(response
            .data
            .into_iter()
            .map(JikanMapper::to_recommendation)
            .collect())
    }
}
