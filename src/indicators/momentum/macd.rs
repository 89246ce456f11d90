//! MACD (Moving Average Convergence Divergence).

use crate::error::IndicatorError;
use crate::indicators::math;
use crate::models::indicators::MacdValue;

/// Calculate MACD from a close series.
///
/// Line = EMA(fast) - EMA(slow); signal = EMA(signal_period) of the line
/// series; histogram = line - signal. Requires `slow + signal_period` closes
/// for a stable signal line.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<MacdValue, IndicatorError> {
    let required = slow + signal_period;
    if closes.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            actual: closes.len(),
        });
    }

    let fast_ema = math::ema_series(closes, fast)?;
    let slow_ema = math::ema_series(closes, slow)?;

    // Both series end at the last close; align the fast series to the
    // slow one's start.
    let offset = fast_ema.len() - slow_ema.len();
    let line_series: Vec<f64> = slow_ema
        .iter()
        .zip(&fast_ema[offset..])
        .map(|(s, f)| f - s)
        .collect();

    let signal_series = math::ema_series(&line_series, signal_period)?;

    let line = line_series[line_series.len() - 1];
    let signal = signal_series[signal_series.len() - 1];
    Ok(MacdValue {
        line,
        signal,
        histogram: line - signal,
    })
}
