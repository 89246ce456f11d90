//! Unit tests for SMA

use marketbrief::indicators::sma;
use marketbrief::indicators::trend::sma_pair;

#[test]
fn constant_series_equals_the_constant() {
    let closes = vec![123.45; 25];
    assert_eq!(sma(&closes, 20).unwrap(), 123.45);
}

#[test]
fn uses_only_the_trailing_window() {
    let mut closes = vec![1000.0; 10];
    closes.extend(std::iter::repeat(10.0).take(20));
    assert_eq!(sma(&closes, 20).unwrap(), 10.0);
}

#[test]
fn pair_degrades_independently() {
    // 30 closes: enough for the short window, not the long one.
    let closes = vec![5.0; 30];
    let (short, long) = sma_pair(&closes, 20, 50);
    assert_eq!(short, Some(5.0));
    assert_eq!(long, None);
}

#[test]
fn pair_fills_both_given_enough_history() {
    let closes: Vec<f64> = (0..60).map(|i| i as f64).collect();
    let (short, long) = sma_pair(&closes, 20, 50);
    assert!(short.is_some());
    assert!(long.is_some());
    // Rising series: recent mean above the older, wider mean.
    assert!(short.unwrap() > long.unwrap());
}
