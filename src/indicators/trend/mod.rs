//! Trend indicators.

pub mod sma;

pub use sma::{sma, sma_pair};
