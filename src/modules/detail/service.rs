use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::modules::cache::EntityCache;
use crate::modules::library::KeyValueStore;
use crate::modules::provider::CatalogProvider;
use crate::shared::errors::AppResult;

use super::aggregator::{EntityAggregate, FetchAggregator};

/// Persisted form of a cached detail aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedAggregate {
    stored_at: DateTime<Utc>,
    aggregate: EntityAggregate,
}

/// Detail-page lookups with a two-layer cache: process-lifetime memory
/// first, then the persisted store (which survives restarts). Both honor
/// the same TTL; a failed fetch is never written to either layer.
pub struct DetailService {
    aggregator: FetchAggregator,
    cache: EntityCache<EntityAggregate>,
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
    seq: AtomicU64,
}

impl DetailService {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        store: Arc<dyn KeyValueStore>,
        ttl: Duration,
    ) -> Self {
        Self {
            aggregator: FetchAggregator::new(provider),
            cache: EntityCache::new(ttl),
            store,
            ttl,
            seq: AtomicU64::new(0),
        }
    }

    fn store_key(mal_id: i64) -> String {
        format!("entityCache:{}", mal_id)
    }

    pub async fn get_detail(&self, mal_id: i64) -> AppResult<EntityAggregate> {
        let identity = mal_id.to_string();

        if let Some(aggregate) = self.cache.get(&identity) {
            return Ok(aggregate);
        }

        if let Some(aggregate) = self.read_persisted(mal_id).await {
            // Seed the memory layer so the next lookup skips the store
            let seq = self.next_seq();
            self.cache.put(&identity, aggregate.clone(), seq);
            return Ok(aggregate);
        }

        let seq = self.next_seq();
        let aggregate = self.aggregator.fetch_aggregate(mal_id).await?;
        self.cache.put(&identity, aggregate.clone(), seq);
        self.write_persisted(mal_id, &aggregate).await;
        Ok(aggregate)
    }

    pub fn invalidate(&self, mal_id: i64) {
        self.cache.invalidate(&mal_id.to_string());
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Read the persisted aggregate, evicting it when stale. Storage
    /// problems degrade to a miss; the query itself must not fail on them.
    async fn read_persisted(&self, mal_id: i64) -> Option<EntityAggregate> {
        let key = Self::store_key(mal_id);
        let records = match self.store.read_list(&key).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to read persisted aggregate for {}: {}", mal_id, e);
                return None;
            }
        };

        let record = records.into_iter().next()?;
        let persisted: PersistedAggregate = match serde_json::from_value(record) {
            Ok(p) => p,
            Err(e) => {
                warn!("Dropping corrupt persisted aggregate for {}: {}", mal_id, e);
                let _ = self.store.write_list(&key, Vec::new()).await;
                return None;
            }
        };

        let age = Utc::now().signed_duration_since(persisted.stored_at);
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::hours(1));
        if age < ttl {
            debug!("Persisted aggregate hit for {}", mal_id);
            Some(persisted.aggregate)
        } else {
            debug!("Persisted aggregate for {} expired, evicting", mal_id);
            let _ = self.store.write_list(&key, Vec::new()).await;
            None
        }
    }

    async fn write_persisted(&self, mal_id: i64, aggregate: &EntityAggregate) {
        let persisted = PersistedAggregate {
            stored_at: Utc::now(),
            aggregate: aggregate.clone(),
        };
        let record = match serde_json::to_value(&persisted) {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to serialize aggregate for {}: {}", mal_id, e);
                return;
            }
        };
        if let Err(e) = self
            .store
            .write_list(&Self::store_key(mal_id), vec![record])
            .await
        {
            warn!("Failed to persist aggregate for {}: {}", mal_id, e);
        }
    }
}
