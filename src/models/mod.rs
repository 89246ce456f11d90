//! Data model for price history, indicators, signals and reports.

pub mod indicators;
pub mod overview;
pub mod report;
pub mod series;
pub mod signal;

pub use indicators::{IndicatorSet, MacdValue};
pub use overview::{
    BenchmarkQuote, FearGreedIndex, GlobalCryptoMetrics, MarketOverview, Mover, SectorPerformance,
    TrendingAsset,
};
pub use report::{InstrumentResult, Report, RunStatus};
pub use series::{PriceBar, PriceSeries, Quote, SeriesError};
pub use signal::{Signal, SignalReason};
