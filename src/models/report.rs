//! Per-instrument results and the final briefing report.

use crate::error::InstrumentError;
use crate::models::indicators::IndicatorSet;
use crate::models::overview::MarketOverview;
use crate::models::series::Quote;
use crate::models::signal::Signal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one instrument. Either the indicator/signal fields
/// are populated (possibly partially) or `error` is set, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentResult {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorSet>,
    pub signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<InstrumentError>,
}

impl InstrumentResult {
    pub fn evaluated(
        id: impl Into<String>,
        quote: Quote,
        indicators: IndicatorSet,
        signal: Signal,
        rationale: String,
    ) -> Self {
        Self {
            id: id.into(),
            quote: Some(quote),
            indicators: Some(indicators),
            signal,
            rationale: Some(rationale),
            error: None,
        }
    }

    pub fn failed(id: impl Into<String>, error: InstrumentError) -> Self {
        Self {
            id: id.into(),
            quote: None,
            indicators: None,
            signal: Signal::Unknown,
            rationale: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Run-level classification. Only `TotalFailure` is fatal to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Complete,
    PartialFailure,
    TotalFailure,
}

impl RunStatus {
    /// Classify a run from its per-instrument outcomes.
    pub fn classify(results: &[InstrumentResult]) -> Self {
        let total = results.len();
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        if total == 0 || succeeded == total {
            RunStatus::Complete
        } else if succeeded == 0 {
            RunStatus::TotalFailure
        } else {
            RunStatus::PartialFailure
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, RunStatus::TotalFailure)
    }
}

/// The assembled briefing handed to formatting/notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    /// Preserves the configured watchlist/portfolio order.
    pub instruments: Vec<InstrumentResult>,
    pub overview: MarketOverview,
    pub status: RunStatus,
    pub attempted: usize,
    pub succeeded: usize,
    /// Every failure recorded during the run, even when the run succeeded.
    pub errors: Vec<String>,
}
