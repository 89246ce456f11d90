//! Unit tests for price series construction

use chrono::{Duration, TimeZone, Utc};
use marketbrief::models::{PriceBar, PriceSeries, SeriesError};

fn bar(minute: i64, close: f64) -> PriceBar {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    PriceBar::new(
        base + Duration::minutes(minute),
        close,
        close + 1.0,
        close - 1.0,
        close,
        1000.0,
    )
}

#[test]
fn accepts_strictly_increasing_timestamps() {
    let series = PriceSeries::new(vec![bar(0, 10.0), bar(1, 11.0), bar(2, 12.0)]).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
    assert_eq!(series.last().unwrap().close, 12.0);
}

#[test]
fn rejects_duplicate_timestamps() {
    let result = PriceSeries::new(vec![bar(0, 10.0), bar(0, 11.0)]);
    assert_eq!(result.unwrap_err(), SeriesError::OutOfOrder(1));
}

#[test]
fn rejects_backwards_timestamps() {
    let result = PriceSeries::new(vec![bar(5, 10.0), bar(3, 11.0), bar(8, 12.0)]);
    assert_eq!(result.unwrap_err(), SeriesError::OutOfOrder(1));
}

#[test]
fn empty_series_is_valid_and_empty() {
    let series = PriceSeries::new(Vec::new()).unwrap();
    assert!(series.is_empty());
    assert!(series.last().is_none());
}
