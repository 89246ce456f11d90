//! Volume activity relative to recent average.

use crate::error::IndicatorError;

/// Latest volume divided by the simple average of the preceding `window`
/// volumes (latest bar excluded). A ratio above 1 means above-average
/// activity.
pub fn volume_ratio(volumes: &[f64], window: usize) -> Result<f64, IndicatorError> {
    if window == 0 || volumes.len() < window + 1 {
        return Err(IndicatorError::InsufficientData {
            required: window + 1,
            actual: volumes.len(),
        });
    }

    let latest = volumes[volumes.len() - 1];
    let baseline = &volumes[volumes.len() - 1 - window..volumes.len() - 1];
    let avg = baseline.iter().sum::<f64>() / window as f64;
    if avg == 0.0 {
        return Err(IndicatorError::ZeroAverageVolume);
    }
    Ok(latest / avg)
}
