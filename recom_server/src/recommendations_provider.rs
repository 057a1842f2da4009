use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::json;

use crate::api::RecommendationQuery;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationsProviderError {
    #[error("Invalid recommendation request: {0}")]
    InvalidRequest(String),

    #[error("Recommendations unavailable: {0}")]
    Unavailable(String),

    #[error("Other error {0}")]
    Other(#[from] anyhow::Error),
}

/// Source of the recommendations served by `GET /recommendations/get-recommendation`
#[async_trait::async_trait]
pub trait RecommendationsProvider: Send + Sync {
    async fn get_recommendation(
        &self,
        query: &RecommendationQuery,
    ) -> Result<serde_json::Value, RecommendationsProviderError>;
}

pub type SharedRecommendationsProvider = Arc<dyn RecommendationsProvider>;

/// Serves the most recently published recommendations document to every request,
/// regardless of its query
pub struct InMemoryRecommendationsProvider {
    recommendation: RwLock<serde_json::Value>,
}

impl Default for InMemoryRecommendationsProvider {
    fn default() -> Self {
        Self {
            recommendation: RwLock::new(json!([])),
        }
    }
}

impl InMemoryRecommendationsProvider {
    pub fn new(recommendation: serde_json::Value) -> Self {
        Self {
            recommendation: RwLock::new(recommendation),
        }
    }

    pub fn publish(&self, recommendation: serde_json::Value) {
        *self.recommendation.write() = recommendation;
    }
}

#[async_trait::async_trait]
impl RecommendationsProvider for InMemoryRecommendationsProvider {
    async fn get_recommendation(
        &self,
        _query: &RecommendationQuery,
    ) -> Result<serde_json::Value, RecommendationsProviderError> {
        Ok(self.recommendation.read().clone())
    }
}

#[cfg(test)]
mod in_memory_recommendations_provider_tests {
    use serde_json::json;

    use crate::api::RecommendationQuery;
    use crate::recommendations_provider::{
        InMemoryRecommendationsProvider, RecommendationsProvider,
    };

    #[actix_web::test]
    async fn test_default_recommendation_is_empty_list() {
        let provider = InMemoryRecommendationsProvider::default();

        let recommendation = provider
            .get_recommendation(&RecommendationQuery::new())
            .await
            .expect("Failed to get recommendation");

        assert_eq!(recommendation, json!([]));
    }

    #[actix_web::test]
    /// Tests that publish replaces the served document for every query
    async fn test_publish_replaces_recommendation() {
        let provider = InMemoryRecommendationsProvider::new(json!(["first"]));
        provider.publish(json!({"articles": [1, 2, 3]}));

        let query: RecommendationQuery = [("user".to_string(), "42".to_string())]
            .into_iter()
            .collect();
        let recommendation = provider
            .get_recommendation(&query)
            .await
            .expect("Failed to get recommendation");

        assert_eq!(recommendation, json!({"articles": [1, 2, 3]}));
    }
}
