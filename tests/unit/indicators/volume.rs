//! Unit tests for the volume ratio

use marketbrief::error::IndicatorError;
use marketbrief::indicators::volume_ratio;

#[test]
fn constant_volume_is_ratio_one() {
    let volumes = vec![1000.0; 25];
    assert!((volume_ratio(&volumes, 20).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn spike_detected_against_preceding_average() {
    let mut volumes = vec![1000.0; 20];
    volumes.push(3000.0);
    assert!((volume_ratio(&volumes, 20).unwrap() - 3.0).abs() < 1e-12);
}

#[test]
fn latest_bar_excluded_from_baseline() {
    // Baseline must be the 3 bars before the last one, not include it.
    let volumes = vec![100.0, 100.0, 100.0, 400.0];
    assert_eq!(volume_ratio(&volumes, 3).unwrap(), 4.0);
}

#[test]
fn insufficient_data() {
    let volumes = vec![500.0; 20];
    assert_eq!(
        volume_ratio(&volumes, 20),
        Err(IndicatorError::InsufficientData {
            required: 21,
            actual: 20
        })
    );
}

#[test]
fn zero_average_volume_is_not_a_division() {
    let mut volumes = vec![0.0; 20];
    volumes.push(100.0);
    assert_eq!(
        volume_ratio(&volumes, 20),
        Err(IndicatorError::ZeroAverageVolume)
    );
}
