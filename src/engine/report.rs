//! Final report assembly: a pure merge of the orchestrator output and the
//! market overview.

use crate::models::overview::MarketOverview;
use crate::models::report::{InstrumentResult, Report, RunStatus};
use chrono::Utc;

/// Merge per-instrument results (already in configured order), the overview
/// and the accumulated section errors into the final report. Instrument
/// errors are mirrored into the error list so no failure is silently
/// dropped.
pub fn assemble_report(
    instruments: Vec<InstrumentResult>,
    status: RunStatus,
    overview: MarketOverview,
    mut errors: Vec<String>,
) -> Report {
    let attempted = instruments.len();
    let succeeded = instruments.iter().filter(|r| r.is_success()).count();

    for result in &instruments {
        if let Some(ref error) = result.error {
            errors.push(format!("{}: {}", result.id, error));
        }
    }

    Report {
        timestamp: Utc::now(),
        instruments,
        overview,
        status,
        attempted,
        succeeded,
        errors,
    }
}
