use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

/// Cached value with its storage time and the sequence number of the
/// request generation that produced it.
#[derive(Debug, Clone)]
struct CacheSlot<T> {
    value: T,
    stored_at: Instant,
    seq: u64,
}

/// Cache statistics for logging and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// TTL-keyed result cache with last-write-wins by completion order.
///
/// Each write carries the monotonic sequence number of the request that
/// produced it; a write is discarded when a higher-sequence write for the
/// same identity already landed, so a slow stale response can never clobber
/// a fresher one. Expiry is lazy: checked on read, evicted on that read,
/// no background sweep.
#[derive(Debug)]
pub struct EntityCache<T> {
    entries: DashMap<String, CacheSlot<T>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Clone> EntityCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, identity: &str) -> Option<T> {
        let hit = match self.entries.get(identity) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => None, // expired, evicted below once the guard is dropped
            None => None,
        };

        match hit {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for {}", identity);
                Some(value)
            }
            None => {
                // Expired entries are treated as a miss and evicted on this read
                self.entries
                    .remove_if(identity, |_, slot| slot.stored_at.elapsed() >= self.ttl);
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for {}", identity);
                None
            }
        }
    }

    /// Store a value. Returns false when the write was discarded because a
    /// newer generation already wrote this identity.
    pub fn put(&self, identity: &str, value: T, seq: u64) -> bool {
        use dashmap::mapref::entry::Entry;

        let slot = CacheSlot {
            value,
            stored_at: Instant::now(),
            seq,
        };

        match self.entries.entry(identity.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().seq > seq {
                    debug!(
                        "Discarding stale write for {} (seq {} < {})",
                        identity,
                        seq,
                        occupied.get().seq
                    );
                    false
                } else {
                    occupied.insert(slot);
                    true
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
                true
            }
        }
    }

    pub fn invalidate(&self, identity: &str) {
        self.entries.remove(identity);
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
        }
    }
}
