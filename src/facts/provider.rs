use std::future::Future;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{CatFactsError, Result};
use crate::facts::pick_fallback;

/// Body returned by the fact endpoint
#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

/// Fetches cat facts, falling back to the built-in pool on any failure
pub struct FactProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl FactProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Single request to the endpoint, no retries
    pub async fn fetch(&self) -> Result<String> {
        debug!(endpoint = %self.endpoint, "Fetching cat fact");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let parsed: FactResponse = serde_json::from_str(&body)?;

        let fact = parsed.fact.trim();
        if fact.is_empty() {
            return Err(CatFactsError::MissingFact);
        }
        Ok(fact.to_string())
    }

    /// Always yields a fact: the remote one, or a random fallback
    pub async fn get_fact(&self) -> String {
        match self.fetch().await {
            Ok(fact) => fact,
            Err(e) => fallback(e, &mut rand::thread_rng()),
        }
    }

    /// Like [`get_fact`](Self::get_fact) with a caller-supplied random source
    pub async fn get_fact_with_rng<R: Rng>(&self, rng: &mut R) -> String {
        match self.fetch().await {
            Ok(fact) => fact,
            Err(e) => fallback(e, rng),
        }
    }

    /// Like [`get_fact`](Self::get_fact), but gives up on the request as soon
    /// as `cancel` resolves
    pub async fn get_fact_until<F>(&self, cancel: F) -> String
    where
        F: Future<Output = ()>,
    {
        let result = tokio::select! {
            result = self.fetch() => result,
            _ = cancel => Err(CatFactsError::Cancelled),
        };

        match result {
            Ok(fact) => fact,
            Err(e) => fallback(e, &mut rand::thread_rng()),
        }
    }
}

fn fallback<R: Rng>(err: CatFactsError, rng: &mut R) -> String {
    debug!(error = %err, "Using fallback fact");
    pick_fallback(rng).to_string()
}
