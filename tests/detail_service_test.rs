mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;

use aniview::{
    AnimeType, AppError, DetailService, EntityAggregate, KeyValueStore, MemoryStore,
};

use support::{anime, StubProvider};

const DETAIL_TTL: Duration = Duration::from_secs(60 * 60);

fn detail_provider() -> StubProvider {
    StubProvider::new().with_detail(anime(1, "Cowboy Bebop", AnimeType::TV, Some(8.7)))
}

async fn persisted_records(store: &MemoryStore, mal_id: i64) -> Vec<serde_json::Value> {
    store
        .read_list(&format!("entityCache:{}", mal_id))
        .await
        .unwrap()
}

/// Write an aggregate into the store with a back-dated timestamp, as if a
/// previous run had cached it `age` ago.
async fn seed_persisted(store: &MemoryStore, mal_id: i64, age: chrono::Duration) {
    let aggregate = EntityAggregate {
        primary: anime(mal_id, "Persisted Bebop", AnimeType::TV, Some(8.7)),
        characters: Vec::new(),
        recommendations: Vec::new(),
    };
    let record = json!({
        "stored_at": (Utc::now() - age).to_rfc3339(),
        "aggregate": serde_json::to_value(&aggregate).unwrap(),
    });
    store
        .write_list(&format!("entityCache:{}", mal_id), vec![record])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fetch_populates_both_cache_layers() {
    let provider = Arc::new(detail_provider());
    let store = Arc::new(MemoryStore::new());
    let service = DetailService::new(provider.clone(), store.clone(), DETAIL_TTL);

    let aggregate = service.get_detail(1).await.unwrap();
    assert_eq!(aggregate.primary.title, "Cowboy Bebop");
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 1);
    assert_eq!(persisted_records(&store, 1).await.len(), 1);

    // Second lookup comes from the memory layer
    service.get_detail(1).await.unwrap();
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_partial_failure_fails_whole_aggregate_and_persists_nothing() {
    let provider = Arc::new(
        detail_provider().with_characters_error(AppError::Transport { status: 500 }),
    );
    let store = Arc::new(MemoryStore::new());
    let service = DetailService::new(provider.clone(), store.clone(), DETAIL_TTL);

    let result = service.get_detail(1).await;
    assert!(matches!(result, Err(AppError::AggregateFetchFailed { .. })));
    assert!(persisted_records(&store, 1).await.is_empty());

    // Nothing cached in memory either: the retry fetches again
    let retry = service.get_detail(1).await;
    assert!(retry.is_err());
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_rate_limit_passes_through_unwrapped() {
    let provider = Arc::new(detail_provider().with_characters_error(AppError::RateLimited));
    let store = Arc::new(MemoryStore::new());
    let service = DetailService::new(provider, store, DETAIL_TTL);

    let result = service.get_detail(1).await;
    assert!(matches!(result, Err(AppError::RateLimited)));
}

#[tokio::test]
async fn test_fresh_persisted_aggregate_served_without_fetching() {
    let provider = Arc::new(detail_provider());
    let store = Arc::new(MemoryStore::new());
    seed_persisted(&store, 1, chrono::Duration::minutes(59)).await;

    let service = DetailService::new(provider.clone(), store, DETAIL_TTL);
    let aggregate = service.get_detail(1).await.unwrap();

    assert_eq!(aggregate.primary.title, "Persisted Bebop");
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_expired_persisted_aggregate_evicted_and_refetched() {
    let provider = Arc::new(detail_provider());
    let store = Arc::new(MemoryStore::new());
    seed_persisted(&store, 1, chrono::Duration::minutes(61)).await;

    let service = DetailService::new(provider.clone(), store.clone(), DETAIL_TTL);
    let aggregate = service.get_detail(1).await.unwrap();

    // The stale record was replaced by a freshly fetched one
    assert_eq!(aggregate.primary.title, "Cowboy Bebop");
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 1);
    let records = persisted_records(&store, 1).await;
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_corrupt_persisted_record_degrades_to_refetch() {
    let provider = Arc::new(detail_provider());
    let store = Arc::new(MemoryStore::new());
    store
        .write_list("entityCache:1", vec![json!({"not": "an aggregate"})])
        .await
        .unwrap();

    let service = DetailService::new(provider.clone(), store, DETAIL_TTL);
    let aggregate = service.get_detail(1).await.unwrap();

    assert_eq!(aggregate.primary.title, "Cowboy Bebop");
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let provider = Arc::new(detail_provider());
    let store = Arc::new(MemoryStore::new());
    let service = DetailService::new(provider.clone(), store.clone(), DETAIL_TTL);

    service.get_detail(1).await.unwrap();
    service.invalidate(1);
    // Memory layer is gone, but the store still has the fresh record
    service.get_detail(1).await.unwrap();
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 1);

    store.write_list("entityCache:1", Vec::new()).await.unwrap();
    service.invalidate(1);
    service.get_detail(1).await.unwrap();
    assert_eq!(provider.detail_calls.load(Ordering::SeqCst), 2);
}
