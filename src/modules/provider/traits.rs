use async_trait::async_trait;

use crate::modules::anime::{Anime, CharacterRole, Genre, RecommendationEntry};
use crate::modules::query::{RequestDescriptor, Season};
use crate::shared::errors::AppResult;

/// Read-only catalog API surface the core orchestrates against.
///
/// One method per remote endpoint; every call is a single `GET` whose
/// non-2xx outcomes map to the shared error taxonomy (429 becomes
/// `AppError::RateLimited` and is surfaced verbatim, never retried here).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Free-text search with server-side filters from the descriptor params.
    async fn search_anime(&self, descriptor: &RequestDescriptor) -> AppResult<Vec<Anime>>;

    async fn top_anime(&self, limit: usize) -> AppResult<Vec<Anime>>;

    async fn seasonal_anime(&self, year: i32, season: Season, limit: usize)
        -> AppResult<Vec<Anime>>;

    async fn genre_taxonomy(&self) -> AppResult<Vec<Genre>>;

    async fn anime_by_id(&self, mal_id: i64) -> AppResult<Anime>;

    async fn anime_characters(&self, mal_id: i64) -> AppResult<Vec<CharacterRole>>;

    async fn anime_recommendations(&self, mal_id: i64) -> AppResult<Vec<RecommendationEntry>>;
}
