//! Fear & Greed Index client (alternative.me-style API).

use crate::error::FetchError;
use crate::models::overview::FearGreedIndex;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.alternative.me";

#[derive(Debug, Deserialize)]
struct FngEnvelope {
    #[serde(default)]
    data: Vec<FngItem>,
}

#[derive(Debug, Deserialize)]
struct FngItem {
    value: String,
    value_classification: String,
    #[serde(default)]
    timestamp: String,
}

pub struct FearGreedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FearGreedClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_client(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn fetch_index(&self) -> Result<FearGreedIndex, FetchError> {
        let url = format!("{}/fng/?limit=1", self.base_url);
        let send = || async { self.http.get(&url).send().await };
        let response = send
            .retry(ExponentialBuilder::default().with_max_times(2))
            .when(|e: &reqwest::Error| e.is_timeout() || e.is_connect())
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let envelope: FngEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        let item = envelope
            .data
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Empty("fear & greed index".to_string()))?;

        let value: u8 = item
            .value
            .parse()
            .map_err(|_| FetchError::Malformed(format!("non-numeric index value {:?}", item.value)))?;
        let timestamp = item
            .timestamp
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Ok(FearGreedIndex {
            value,
            label: item.value_classification,
            timestamp,
        })
    }
}

impl Default for FearGreedClient {
    fn default() -> Self {
        Self::new()
    }
}
