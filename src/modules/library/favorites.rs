use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modules::anime::Anime;
use crate::shared::errors::AppResult;

use super::store::KeyValueStore;

pub const FAVORITES_KEY: &str = "favorites";

/// The slice of an entry worth keeping for the favorites list card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub mal_id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub score: Option<f32>,
}

impl From<&Anime> for FavoriteEntry {
    fn from(anime: &Anime) -> Self {
        Self {
            mal_id: anime.mal_id,
            title: anime.title.clone(),
            image_url: anime.image_url.clone(),
            score: anime.score,
        }
    }
}

/// Persisted favorites list. Invariant: at most one entry per entity id.
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        let records = self.store.read_list(FAVORITES_KEY).await?;
        let mut favorites = Vec::with_capacity(records.len());
        for record in records {
            favorites.push(serde_json::from_value(record)?);
        }
        Ok(favorites)
    }

    pub async fn is_favorite(&self, mal_id: i64) -> AppResult<bool> {
        Ok(self.list().await?.iter().any(|f| f.mal_id == mal_id))
    }

    /// Add or remove the entry; returns true when it is a favorite after
    /// the toggle.
    pub async fn toggle(&self, entry: FavoriteEntry) -> AppResult<bool> {
        let mut favorites = self.list().await?;
        let now_favorite = match favorites.iter().position(|f| f.mal_id == entry.mal_id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(entry);
                true
            }
        };

        let records = favorites
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.write_list(FAVORITES_KEY, records).await?;
        debug!("Favorites toggled, now_favorite={}", now_favorite);
        Ok(now_favorite)
    }
}
