use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modules::anime::{Anime, CharacterRole, RecommendationEntry};
use crate::modules::provider::CatalogProvider;
use crate::shared::errors::{AppError, AppResult};

/// A primary entry plus its required related-resource sets, treated as one
/// cache unit. Only constructed when all three sub-fetches succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAggregate {
    pub primary: Anime,
    pub characters: Vec<CharacterRole>,
    pub recommendations: Vec<RecommendationEntry>,
}

/// Issues the detail sub-requests concurrently and merges them.
///
/// All-or-nothing: a single failing sub-request fails the whole aggregate
/// and nothing is cached. Remaining in-flight requests are dropped on the
/// first failure; their results are discarded, never surfaced.
pub struct FetchAggregator {
    provider: Arc<dyn CatalogProvider>,
}

impl FetchAggregator {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_aggregate(&self, mal_id: i64) -> AppResult<EntityAggregate> {
        debug!("Fetching detail aggregate for {}", mal_id);

        let result = futures::try_join!(
            self.provider.anime_by_id(mal_id),
            self.provider.anime_characters(mal_id),
            self.provider.anime_recommendations(mal_id),
        );

        match result {
            Ok((primary, characters, recommendations)) => Ok(EntityAggregate {
                primary,
                characters,
                recommendations,
            }),
            // A remote rate limit is surfaced verbatim so the caller can
            // tell the user to back off instead of blaming the entry.
            Err(AppError::RateLimited) => Err(AppError::RateLimited),
            Err(cause) => Err(AppError::AggregateFetchFailed {
                cause: cause.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::MockCatalogProvider;

    fn provider_with_detail_ok() -> MockCatalogProvider {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_anime_by_id()
            .returning(|id| Ok(Anime::new(id, "Cowboy Bebop")));
        provider
    }

    #[tokio::test]
    async fn test_aggregate_merges_all_three_resources() {
        let mut provider = provider_with_detail_ok();
        provider.expect_anime_characters().returning(|_| {
            Ok(vec![CharacterRole {
                mal_id: 1,
                name: "Spike Spiegel".to_string(),
                image_url: None,
                role: Some("Main".to_string()),
                favorites: None,
            }])
        });
        provider.expect_anime_recommendations().returning(|_| {
            Ok(vec![RecommendationEntry {
                mal_id: 205,
                title: "Samurai Champloo".to_string(),
                image_url: None,
                votes: Some(300),
            }])
        });

        let aggregator = FetchAggregator::new(Arc::new(provider));
        let aggregate = aggregator.fetch_aggregate(1).await.unwrap();
        assert_eq!(aggregate.primary.title, "Cowboy Bebop");
        assert_eq!(aggregate.characters.len(), 1);
        assert_eq!(aggregate.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn test_one_failing_sub_request_fails_the_aggregate() {
        let mut provider = provider_with_detail_ok();
        provider
            .expect_anime_characters()
            .returning(|_| Err(AppError::Transport { status: 500 }));
        provider
            .expect_anime_recommendations()
            .returning(|_| Ok(vec![]));

        let aggregator = FetchAggregator::new(Arc::new(provider));
        let err = aggregator.fetch_aggregate(1).await.unwrap_err();
        assert!(matches!(err, AppError::AggregateFetchFailed { .. }));
    }

    #[tokio::test]
    async fn test_rate_limit_surfaced_verbatim() {
        let mut provider = provider_with_detail_ok();
        provider
            .expect_anime_characters()
            .returning(|_| Err(AppError::RateLimited));
        provider
            .expect_anime_recommendations()
            .returning(|_| Ok(vec![]));

        let aggregator = FetchAggregator::new(Arc::new(provider));
        let err = aggregator.fetch_aggregate(1).await.unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
    }
}
