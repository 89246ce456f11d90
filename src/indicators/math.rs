//! Moving-average primitives shared by the indicator calculators.

use crate::error::IndicatorError;

/// Simple moving average over the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 || values.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period.max(1),
            actual: values.len(),
        });
    }
    let window = &values[values.len() - period..];
    Ok(window.iter().sum::<f64>() / period as f64)
}

/// Exponential moving average of the full series.
///
/// Seeded with the simple mean of the first `period` values, then
/// `EMA_t = v_t * k + EMA_{t-1} * (1 - k)` with `k = 2 / (period + 1)`.
pub fn ema(values: &[f64], period: usize) -> Result<f64, IndicatorError> {
    ema_series(values, period).map(|s| s[s.len() - 1])
}

/// Full EMA series, one value per input from index `period - 1` onward.
pub fn ema_series(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 || values.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period.max(1),
            actual: values.len(),
        });
    }
    let k = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);
    let mut prev = seed;
    for &value in &values[period..] {
        prev = value * k + prev * (1.0 - k);
        out.push(prev);
    }
    Ok(out)
}
