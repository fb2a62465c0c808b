//! Upstream menu source client
//!
//! One GET per category slug against the configured base URL. The upstream
//! uses its own field names (`dsc`, `img`); [`SourceMenuItem::normalize`] is
//! the single place that absorbs that skew.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use shared::models::MenuItem;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout, or undecodable body
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Raw item as served by the upstream API.
///
/// Every field is defaulted: a missing `dsc` or `img` must not fail the
/// whole category. Extra fields (`rate`, `country`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceMenuItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Upstream name for the description
    #[serde(default)]
    pub dsc: String,
    #[serde(default)]
    pub price: f64,
    /// Upstream name for the image URL
    #[serde(default)]
    pub img: String,
}

impl SourceMenuItem {
    /// Map the source shape into the internal [`MenuItem`] shape.
    pub fn normalize(self) -> MenuItem {
        MenuItem {
            id: self.id,
            name: self.name,
            description: self.dsc,
            price: self.price,
            image_url: self.img,
        }
    }
}

/// Fetches one category's raw item list from one upstream source.
///
/// A trait so the aggregator can be exercised without network access.
#[async_trait]
pub trait MenuFetcher: Send + Sync {
    async fn fetch(&self, slug: &str) -> Result<Vec<SourceMenuItem>, FetchError>;
}

/// Production fetcher backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpMenuClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMenuClient {
    /// Build the client with a per-request timeout.
    ///
    /// The timeout keeps one stalled upstream category from wedging the
    /// whole aggregation.
    pub fn new(base_url: &str, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MenuFetcher for HttpMenuClient {
    async fn fetch(&self, slug: &str) -> Result<Vec<SourceMenuItem>, FetchError> {
        let url = format!("{}/{}", self.base_url, slug);

        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        let items = resp.json::<Vec<SourceMenuItem>>().await?;
        Ok(items)
    }
}
