use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::modules::anime::Genre;
use crate::modules::provider::traits::CatalogProvider;

/// Case-insensitive genre-name to id mapping from the catalog's taxonomy.
#[derive(Debug, Clone, Default)]
pub struct GenreTaxonomy {
    by_name: HashMap<String, i64>,
}

impl GenreTaxonomy {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_genres(genres: &[Genre]) -> Self {
        let by_name = genres
            .iter()
            .map(|g| (g.name.to_lowercase(), g.mal_id))
            .collect();
        Self { by_name }
    }

    /// Resolve a genre name to its stable numeric id, if known.
    pub fn resolve(&self, name: &str) -> Option<i64> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Fetches the genre taxonomy once per process and memoizes it.
///
/// A failed fetch degrades to an empty mapping without caching the failure,
/// so genre filtering falls back to client-side name matching until the
/// taxonomy becomes available.
pub struct GenreTaxonomyService {
    provider: Arc<dyn CatalogProvider>,
    cached: OnceCell<GenreTaxonomy>,
}

impl GenreTaxonomyService {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            cached: OnceCell::new(),
        }
    }

    pub async fn taxonomy(&self) -> GenreTaxonomy {
        if let Some(taxonomy) = self.cached.get() {
            return taxonomy.clone();
        }

        match self.provider.genre_taxonomy().await {
            Ok(genres) => {
                let taxonomy = GenreTaxonomy::from_genres(&genres);
                debug!("Fetched genre taxonomy with {} entries", taxonomy.len());
                let _ = self.cached.set(taxonomy.clone());
                taxonomy
            }
            Err(e) => {
                warn!("Failed to fetch genre taxonomy, falling back to client-side genre matching: {}", e);
                GenreTaxonomy::empty()
            }
        }
    }
}
