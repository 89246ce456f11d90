//! Unit tests for the moving-average primitives

use marketbrief::error::IndicatorError;
use marketbrief::indicators::math::{ema, ema_series, sma};

#[test]
fn sma_is_mean_of_trailing_window() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert_eq!(sma(&values, 3).unwrap(), 5.0);
    assert_eq!(sma(&values, 6).unwrap(), 3.5);
}

#[test]
fn sma_insufficient_data() {
    let values = vec![1.0, 2.0];
    assert_eq!(
        sma(&values, 3),
        Err(IndicatorError::InsufficientData {
            required: 3,
            actual: 2
        })
    );
}

#[test]
fn ema_seeds_with_simple_average() {
    // With exactly `period` values the EMA is the plain mean.
    let values = vec![2.0, 4.0, 6.0];
    assert_eq!(ema(&values, 3).unwrap(), 4.0);
}

#[test]
fn ema_recurrence_matches_hand_computation() {
    // k = 2/(3+1) = 0.5; seed = 2, then 0.5*4 + 0.5*2 = 3, then 0.5*8 + 0.5*3 = 5.5
    let values = vec![1.0, 2.0, 3.0, 4.0, 8.0];
    let series = ema_series(&values, 3).unwrap();
    assert_eq!(series, vec![2.0, 3.0, 5.5]);
    assert_eq!(ema(&values, 3).unwrap(), 5.5);
}

#[test]
fn ema_of_constant_series_is_the_constant() {
    let values = vec![7.5; 40];
    assert!((ema(&values, 12).unwrap() - 7.5).abs() < 1e-12);
}

#[test]
fn zero_period_is_rejected() {
    assert!(sma(&[1.0], 0).is_err());
    assert!(ema(&[1.0], 0).is_err());
}
