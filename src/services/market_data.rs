//! Data-source seams consumed by the engine.
//!
//! Retry policy (if any) lives behind these traits; the engine records
//! whatever outcome it receives per call.

use crate::config::InstrumentSpec;
use crate::error::FetchError;
use crate::models::overview::{
    BenchmarkQuote, FearGreedIndex, GlobalCryptoMetrics, Mover, SectorPerformance, TrendingAsset,
};
use crate::models::series::{PriceSeries, Quote};
use async_trait::async_trait;

/// Per-instrument price data.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Latest snapshot for one instrument.
    async fn fetch_quote(&self, spec: &InstrumentSpec) -> Result<Quote, FetchError>;

    /// Ordered price history, oldest bar first, covering roughly
    /// `lookback_bars` bars.
    async fn fetch_series(
        &self,
        spec: &InstrumentSpec,
        lookback_bars: u32,
    ) -> Result<PriceSeries, FetchError>;
}

/// Broad-market overview sections. Each method is fetched independently by
/// the overview aggregator; sources implement only the sections they carry.
#[async_trait]
pub trait OverviewSource: Send + Sync {
    async fn benchmarks(&self) -> Result<Vec<BenchmarkQuote>, FetchError> {
        Err(FetchError::Empty("benchmarks not supported".to_string()))
    }

    async fn sectors(&self) -> Result<Vec<SectorPerformance>, FetchError> {
        Err(FetchError::Empty("sectors not supported".to_string()))
    }

    /// Top gainers and losers, each sorted by move size.
    async fn top_movers(&self) -> Result<(Vec<Mover>, Vec<Mover>), FetchError> {
        Err(FetchError::Empty("top movers not supported".to_string()))
    }

    /// Largest assets by market cap.
    async fn top_assets(&self) -> Result<Vec<Quote>, FetchError> {
        Err(FetchError::Empty("top assets not supported".to_string()))
    }

    async fn global_crypto(&self) -> Result<GlobalCryptoMetrics, FetchError> {
        Err(FetchError::Empty("global metrics not supported".to_string()))
    }

    async fn fear_greed(&self) -> Result<FearGreedIndex, FetchError> {
        Err(FetchError::Empty("fear & greed not supported".to_string()))
    }

    async fn trending(&self) -> Result<Vec<TrendingAsset>, FetchError> {
        Err(FetchError::Empty("trending not supported".to_string()))
    }
}
