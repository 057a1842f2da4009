use anyhow::{bail, Context};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use reqwest_tracing::TracingMiddleware;

use crate::api::{get_recommendation_url_path, RecommendationQuery};

const MAX_RETRIES: u32 = 3;

pub struct RecommendationsClient {
    url: String,
    client: ClientWithMiddleware,
}

impl RecommendationsClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES);
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Calls GET /recommendations/get-recommendation endpoint
    /// Query parameters are forwarded as they are
    pub async fn get_recommendation(
        &self,
        query: &RecommendationQuery,
    ) -> anyhow::Result<serde_json::Value> {
        let response = self
            .client
            .get(format!("{}{}", self.url, get_recommendation_url_path()))
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Failed to get recommendation, status {}", response.status())
        }

        response
            .json()
            .await
            .context("Failed to parse recommendation")
    }

    /// Calls GET /health endpoint
    pub async fn health(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.url))
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}
