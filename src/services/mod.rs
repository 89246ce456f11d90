//! External data-source clients and the traits the engine consumes.

pub mod coingecko;
pub mod fear_greed;
pub mod market_data;
pub mod yahoo;

pub use coingecko::CoinGeckoClient;
pub use fear_greed::FearGreedClient;
pub use market_data::{MarketDataSource, OverviewSource};
pub use yahoo::YahooClient;

use crate::error::FetchError;
use crate::models::overview::{FearGreedIndex, GlobalCryptoMetrics, TrendingAsset};
use crate::models::series::Quote;
use async_trait::async_trait;
use std::sync::Arc;

/// Overview source for crypto briefs: market sections from CoinGecko,
/// sentiment from the Fear & Greed API.
pub struct CryptoOverviewSource {
    coingecko: Arc<CoinGeckoClient>,
    fear_greed: FearGreedClient,
}

impl CryptoOverviewSource {
    pub fn new(coingecko: Arc<CoinGeckoClient>, fear_greed: FearGreedClient) -> Self {
        Self {
            coingecko,
            fear_greed,
        }
    }
}

#[async_trait]
impl OverviewSource for CryptoOverviewSource {
    async fn top_assets(&self) -> Result<Vec<Quote>, FetchError> {
        self.coingecko.top_assets().await
    }

    async fn global_crypto(&self) -> Result<GlobalCryptoMetrics, FetchError> {
        self.coingecko.global_crypto().await
    }

    async fn trending(&self) -> Result<Vec<TrendingAsset>, FetchError> {
        self.coingecko.trending().await
    }

    async fn fear_greed(&self) -> Result<FearGreedIndex, FetchError> {
        self.fear_greed.fetch_index().await
    }
}
