use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading recommendation for one instrument.
///
/// `Unknown` is reserved for the insufficient-data case and is never
/// conflated with `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
    Unknown,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::StrongBuy => "Strong Buy",
            Signal::Buy => "Buy",
            Signal::Neutral => "Neutral",
            Signal::Sell => "Sell",
            Signal::StrongSell => "Strong Sell",
            Signal::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// One indicator's contribution to the aggregated signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub vote: i8,
}

impl SignalReason {
    pub fn new(description: impl Into<String>, vote: i8) -> Self {
        Self {
            description: description.into(),
            vote,
        }
    }
}
