//! Drives fetch-and-evaluate across the configured instrument list.

use crate::config::{IndicatorConfig, InstrumentSpec, RunParameters, SignalPolicy};
use crate::engine::evaluator::evaluate_instrument;
use crate::error::InstrumentError;
use crate::models::report::{InstrumentResult, RunStatus};
use crate::services::MarketDataSource;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

/// Runs instruments with bounded concurrency, preserves the configured
/// order in its output and never lets one instrument's failure abort the
/// rest of the run.
pub struct Orchestrator {
    source: Arc<dyn MarketDataSource>,
    indicators: IndicatorConfig,
    policy: SignalPolicy,
    params: RunParameters,
}

impl Orchestrator {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        indicators: IndicatorConfig,
        policy: SignalPolicy,
        params: RunParameters,
    ) -> Self {
        Self {
            source,
            indicators,
            policy,
            params,
        }
    }

    /// Evaluate every configured instrument. Returns one result per input
    /// entry, in input order, plus the run classification.
    pub async fn run(&self, instruments: &[InstrumentSpec]) -> (Vec<InstrumentResult>, RunStatus) {
        let total = instruments.len();
        info!(
            instruments = total,
            concurrency = self.params.concurrency,
            "starting run"
        );

        // Completion order is not presentation order: results land in
        // index-addressed slots and unfilled slots become timeout failures.
        let mut slots: Vec<Option<InstrumentResult>> = (0..total).map(|_| None).collect();
        {
            let mut completions = stream::iter(instruments.iter().enumerate().map(
                |(index, spec)| async move { (index, self.evaluate_one(spec).await) },
            ))
            .buffer_unordered(self.params.concurrency.max(1));

            let drain = async {
                while let Some((index, result)) = completions.next().await {
                    slots[index] = Some(result);
                }
            };

            match self.params.timeout() {
                Some(limit) => {
                    if tokio::time::timeout(limit, drain).await.is_err() {
                        warn!(timeout_s = limit.as_secs(), "run timeout, aborting in-flight fetches");
                    }
                }
                None => drain.await,
            }
        }

        let results: Vec<InstrumentResult> = slots
            .into_iter()
            .zip(instruments)
            .map(|(slot, spec)| {
                slot.unwrap_or_else(|| {
                    InstrumentResult::failed(&spec.id, InstrumentError::Timeout)
                })
            })
            .collect();

        let status = RunStatus::classify(&results);
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        info!(succeeded, total, status = ?status, "run finished");
        (results, status)
    }

    /// Fetch and evaluate a single instrument. Upstream errors become an
    /// error-carrying result instead of propagating.
    async fn evaluate_one(&self, spec: &InstrumentSpec) -> InstrumentResult {
        let quote = match self.source.fetch_quote(spec).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(id = %spec.id, error = %e, "quote fetch failed");
                return InstrumentResult::failed(&spec.id, e.into());
            }
        };

        let series = match self
            .source
            .fetch_series(spec, self.params.lookback_bars)
            .await
        {
            Ok(series) if series.is_empty() => {
                warn!(id = %spec.id, "empty price history");
                return InstrumentResult::failed(&spec.id, InstrumentError::NoData);
            }
            Ok(series) => series,
            Err(e) => {
                warn!(id = %spec.id, error = %e, "history fetch failed");
                return InstrumentResult::failed(&spec.id, e.into());
            }
        };

        evaluate_instrument(&spec.id, quote, &series, &self.indicators, &self.policy)
    }
}
