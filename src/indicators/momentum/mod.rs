//! Momentum indicators.

pub mod macd;
pub mod rsi;

pub use macd::macd;
pub use rsi::rsi;
