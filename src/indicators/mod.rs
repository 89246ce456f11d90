//! Technical indicator calculators.
//!
//! All calculators are pure functions over an ordered close/volume slice and
//! fail with [`IndicatorError::InsufficientData`] rather than guessing when
//! the history is too short.
//!
//! [`IndicatorError::InsufficientData`]: crate::error::IndicatorError::InsufficientData

pub mod math;
pub mod momentum;
pub mod trend;
pub mod volume;

pub use momentum::{macd, rsi};
pub use trend::sma;
pub use volume::volume_ratio;
