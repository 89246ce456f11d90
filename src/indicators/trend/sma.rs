//! SMA (Simple Moving Average).

use crate::error::IndicatorError;
use crate::indicators::math;

/// Simple moving average of the trailing `period` closes.
pub fn sma(closes: &[f64], period: usize) -> Result<f64, IndicatorError> {
    math::sma(closes, period)
}

/// Short and long SMAs computed independently; either may be absent when
/// the series covers only one of the windows.
pub fn sma_pair(closes: &[f64], short: usize, long: usize) -> (Option<f64>, Option<f64>) {
    (sma(closes, short).ok(), sma(closes, long).ok())
}
