//! Per-instrument evaluation pipeline.
//!
//! Runs each calculator independently over the fetched history: a single
//! indicator failing (almost always too little data) leaves that field
//! absent and excluded from voting, it never fails the instrument. Only a
//! total absence of usable data yields an `Unknown` signal.

use crate::config::{IndicatorConfig, SignalPolicy};
use crate::indicators::{macd, rsi, volume_ratio};
use crate::indicators::trend::sma_pair;
use crate::models::indicators::IndicatorSet;
use crate::models::report::InstrumentResult;
use crate::models::series::{PriceSeries, Quote};
use crate::signals::SignalAggregator;
use tracing::debug;

/// Minimum bars before any indicator is attempted: the shortest requirement
/// is RSI's `period + 1` closes.
pub fn min_bars(config: &IndicatorConfig) -> usize {
    config.rsi_period + 1
}

/// Compute the indicator set for a validated series. Each field degrades
/// independently.
pub fn compute_indicators(series: &PriceSeries, config: &IndicatorConfig) -> IndicatorSet {
    let closes = series.closes();
    let volumes = series.volumes();

    let mut set = IndicatorSet::new();
    match rsi(&closes, config.rsi_period) {
        Ok(value) => set.rsi = Some(value),
        Err(e) => debug!(error = %e, "rsi unavailable"),
    }
    match macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal) {
        Ok(value) => set.macd = Some(value),
        Err(e) => debug!(error = %e, "macd unavailable"),
    }
    let (short, long) = sma_pair(&closes, config.sma_short, config.sma_long);
    set.sma_short = short;
    set.sma_long = long;
    match volume_ratio(&volumes, config.volume_window) {
        Ok(value) => set.volume_ratio = Some(value),
        Err(e) => debug!(error = %e, "volume ratio unavailable"),
    }
    set
}

/// Evaluate one instrument from its already-fetched quote and history.
pub fn evaluate_instrument(
    id: &str,
    quote: Quote,
    series: &PriceSeries,
    config: &IndicatorConfig,
    policy: &SignalPolicy,
) -> InstrumentResult {
    let indicators = if series.len() >= min_bars(config) {
        compute_indicators(series, config)
    } else {
        debug!(
            id = %id,
            bars = series.len(),
            min = min_bars(config),
            "series below minimum length, skipping calculators"
        );
        IndicatorSet::new()
    };

    let price = Some(quote.price).filter(|p| *p > 0.0).or_else(|| {
        series.last().map(|bar| bar.close)
    });
    let (signal, rationale) = SignalAggregator::new(policy.clone()).evaluate(price, &indicators);

    debug!(id = %id, signal = %signal, rationale = %rationale, "instrument evaluated");
    InstrumentResult::evaluated(id, quote, indicators, signal, rationale)
}
