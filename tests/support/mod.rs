//! Shared test support: a scriptable catalog provider stub and entity
//! factories used across the integration suites.

// Each suite uses a different slice of this module.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use aniview::{
    Anime, AnimeType, AppError, AppResult, CatalogProvider, CharacterRole, Genre,
    RecommendationEntry, RequestDescriptor, Season,
};

pub fn anime(mal_id: i64, title: &str, anime_type: AnimeType, score: Option<f32>) -> Anime {
    let mut entry = Anime::new(mal_id, title);
    entry.anime_type = anime_type;
    entry.score = score;
    entry
}

pub fn genre(mal_id: i64, name: &str) -> Genre {
    Genre {
        mal_id,
        name: name.to_string(),
    }
}

/// Catalog provider stub with canned responses and per-endpoint call
/// counters. Any endpoint can be scripted to fail.
#[derive(Default)]
pub struct StubProvider {
    pub search_results: Mutex<Vec<Anime>>,
    pub top_results: Mutex<Vec<Anime>>,
    pub seasonal_results: Mutex<Vec<Anime>>,
    pub genres: Mutex<Vec<Genre>>,
    pub detail: Mutex<Option<Anime>>,
    pub characters: Mutex<Vec<CharacterRole>>,
    pub recommendations: Mutex<Vec<RecommendationEntry>>,

    pub search_error: Mutex<Option<AppError>>,
    pub taxonomy_error: Mutex<Option<AppError>>,
    pub characters_error: Mutex<Option<AppError>>,

    pub search_calls: AtomicUsize,
    pub top_calls: AtomicUsize,
    pub seasonal_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_results(self, results: Vec<Anime>) -> Self {
        *self.search_results.lock().unwrap() = results;
        self
    }

    pub fn with_top_results(self, results: Vec<Anime>) -> Self {
        *self.top_results.lock().unwrap() = results;
        self
    }

    pub fn with_genres(self, genres: Vec<Genre>) -> Self {
        *self.genres.lock().unwrap() = genres;
        self
    }

    pub fn with_detail(self, detail: Anime) -> Self {
        *self.detail.lock().unwrap() = Some(detail);
        self
    }

    pub fn with_search_error(self, error: AppError) -> Self {
        *self.search_error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_taxonomy_error(self, error: AppError) -> Self {
        *self.taxonomy_error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_characters_error(self, error: AppError) -> Self {
        *self.characters_error.lock().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl CatalogProvider for StubProvider {
    async fn search_anime(&self, _descriptor: &RequestDescriptor) -> AppResult<Vec<Anime>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.search_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn top_anime(&self, _limit: usize) -> AppResult<Vec<Anime>> {
        self.top_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.top_results.lock().unwrap().clone())
    }

    async fn seasonal_anime(
        &self,
        _year: i32,
        _season: Season,
        _limit: usize,
    ) -> AppResult<Vec<Anime>> {
        self.seasonal_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seasonal_results.lock().unwrap().clone())
    }

    async fn genre_taxonomy(&self) -> AppResult<Vec<Genre>> {
        if let Some(error) = self.taxonomy_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.genres.lock().unwrap().clone())
    }

    async fn anime_by_id(&self, mal_id: i64) -> AppResult<Anime> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.detail
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::NotFound(format!("anime {}", mal_id)))
    }

    async fn anime_characters(&self, _mal_id: i64) -> AppResult<Vec<CharacterRole>> {
        if let Some(error) = self.characters_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.characters.lock().unwrap().clone())
    }

    async fn anime_recommendations(&self, _mal_id: i64) -> AppResult<Vec<RecommendationEntry>> {
        Ok(self.recommendations.lock().unwrap().clone())
    }
}
