//! Broad-market overview types. Every section is independently optional:
//! an absent section means its fetch failed or was disabled, never zero.

use crate::models::series::Quote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A broad-market benchmark quote (index ETF or similar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkQuote {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    pub name: String,
    pub symbol: String,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub symbol: String,
    pub name: String,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingAsset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalCryptoMetrics {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
    pub btc_dominance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_dominance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap_change_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearGreedIndex {
    pub value: u8,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Aggregated market overview. Sub-sections are filled independently by the
/// overview aggregator; one section failing leaves only that section absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<BenchmarkQuote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<Vec<SectorPerformance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gainers: Option<Vec<Mover>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losers: Option<Vec<Mover>>,
    /// Largest assets by market cap (crypto briefs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_assets: Option<Vec<Quote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_crypto: Option<GlobalCryptoMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fear_greed: Option<FearGreedIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending: Option<Vec<TrendingAsset>>,
}

impl MarketOverview {
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_none()
            && self.sectors.is_none()
            && self.gainers.is_none()
            && self.losers.is_none()
            && self.top_assets.is_none()
            && self.global_crypto.is_none()
            && self.fear_greed.is_none()
            && self.trending.is_none()
    }
}
