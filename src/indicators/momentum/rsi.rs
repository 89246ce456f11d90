//! RSI (Relative Strength Index).

use crate::error::IndicatorError;

/// Calculate RSI over the trailing `period` using Wilder's smoothing.
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss. The first
/// averages are simple means of the first `period` deltas; every later delta
/// is folded in with `avg = (avg * (period - 1) + current) / period`.
///
/// Conventions: a flat series (no gains and no losses) yields 50; gains with
/// zero average loss yield 100.
pub fn rsi(closes: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 || closes.len() < period + 1 {
        return Err(IndicatorError::InsufficientData {
            required: period + 1,
            actual: closes.len(),
        });
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;
    for i in period..gains.len() {
        avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return Ok(50.0);
        }
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}
