use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::modules::anime::Anime;
use crate::modules::cache::EntityCache;
use crate::modules::provider::{CatalogProvider, GenreTaxonomyService};
use crate::modules::query::composer::RESULT_LIMIT;
use crate::modules::query::{
    FilterState, QueryComposer, QueryMode, QueryPlan, RequestDescriptor, RequestKind,
};
use crate::modules::refine::ResultRefiner;
use crate::shared::errors::{AppError, AppResult};

use super::config::BrowseConfig;

/// What a single query run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Ready(Vec<Anime>),
    /// The state combination intentionally produced no request.
    Noop,
}

/// Runs the compose -> cache -> fetch -> refine pipeline for list queries.
///
/// Owns the monotonic sequence counter; every pipeline run takes a fresh
/// sequence number so a slow stale response can never overwrite a newer
/// cached result (see `EntityCache::put`).
pub struct BrowseService {
    provider: Arc<dyn CatalogProvider>,
    genres: GenreTaxonomyService,
    cache: EntityCache<Vec<Anime>>,
    seq: AtomicU64,
}

impl BrowseService {
    pub fn new(provider: Arc<dyn CatalogProvider>, config: &BrowseConfig) -> Self {
        Self {
            genres: GenreTaxonomyService::new(provider.clone()),
            cache: EntityCache::new(config.search_ttl),
            provider,
            seq: AtomicU64::new(0),
        }
    }

    /// Run one query for a debounced filter snapshot.
    ///
    /// `QueryTooShort` is the only user-correctable error; transport
    /// failures pass through untouched for the presentation layer to
    /// message. Failed fetches are never cached.
    pub async fn run_query(&self, filter: &FilterState, mode: QueryMode) -> AppResult<QueryOutcome> {
        let taxonomy = self.genres.taxonomy().await;

        let composed = match QueryComposer::compose(filter, mode, &taxonomy) {
            QueryPlan::TooShort => return Err(AppError::QueryTooShort),
            QueryPlan::NoRequest => return Ok(QueryOutcome::Noop),
            QueryPlan::Request(composed) => composed,
        };

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let identity = composed.descriptor.identity.clone();

        // Cache the raw fetched list, not the refined one: curated-list
        // descriptors share an identity across filter snapshots, and the
        // residual filters belong to the snapshot, not the request.
        let raw = match self.cache.get(&identity) {
            Some(cached) => cached,
            None => {
                let fetched = self.fetch_list(&composed.descriptor, mode).await?;
                if !self.cache.put(&identity, fetched.clone(), seq) {
                    debug!("Query {} superseded before its result landed", identity);
                }
                fetched
            }
        };

        let refined = ResultRefiner::refine(raw, &composed.residual);
        Ok(QueryOutcome::Ready(refined))
    }

    async fn fetch_list(
        &self,
        descriptor: &RequestDescriptor,
        mode: QueryMode,
    ) -> AppResult<Vec<Anime>> {
        match descriptor.kind {
            RequestKind::SearchQuery => self.provider.search_anime(descriptor).await,
            RequestKind::TopList => self.provider.top_anime(RESULT_LIMIT).await,
            RequestKind::SeasonalList => match mode {
                QueryMode::Seasonal { year, season } => {
                    self.provider.seasonal_anime(year, season, RESULT_LIMIT).await
                }
                _ => Err(AppError::InvalidInput(
                    "Seasonal descriptor outside seasonal mode".to_string(),
                )),
            },
            RequestKind::DetailAggregate => Err(AppError::InvalidInput(
                "Detail aggregates are fetched through DetailService".to_string(),
            )),
        }
    }

    pub fn invalidate(&self, identity: &str) {
        self.cache.invalidate(identity);
    }

    pub fn cache_stats(&self) -> crate::modules::cache::CacheStats {
        self.cache.stats()
    }
}
