//! HTTP client for the name request API
//!
//! Talks to the `/stats` and `/name-analysis` endpoints and hands the JSON
//! bodies back untouched.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::traits::{NameAnalysisQuery, NameRequestApi};
use crate::config::WizardConfig;
use crate::state::{AnalysisJson, Stats};

/// Failures reported by the API itself
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },
}

/// reqwest-backed implementation of [`NameRequestApi`]
#[derive(Debug, Clone)]
pub struct HttpNameRequestApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNameRequestApi {
    /// Create a client against `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &WizardConfig) -> Result<Self> {
        Self::new(&config.api_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        tracing::debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .with_context(|| format!("Request to {endpoint} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(endpoint, %status, "name request API returned an error");
            return Err(ApiError::Status {
                endpoint,
                status,
                body,
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {endpoint} response"))
    }
}

#[async_trait]
impl NameRequestApi for HttpNameRequestApi {
    async fn get_stats(&self) -> Result<Stats> {
        self.get_json("/stats", &[]).await
    }

    async fn analyze_name(&self, query: &NameAnalysisQuery) -> Result<AnalysisJson> {
        self.get_json("/name-analysis", &query.to_pairs()).await
    }
}
