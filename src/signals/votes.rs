//! Per-indicator directional votes in {-2..+2}.
//!
//! Positive votes are bullish. RSI votes contrarian: oversold readings are
//! treated as exhaustion and vote bullish, overbought readings bearish, even
//! while price is still moving the other way.

use crate::config::SignalPolicy;
use crate::models::indicators::MacdValue;
use crate::models::signal::SignalReason;

pub fn rsi_vote(rsi: f64, policy: &SignalPolicy) -> SignalReason {
    if rsi < policy.rsi_oversold {
        SignalReason::new(format!("RSI {:.1} oversold", rsi), 2)
    } else if rsi < policy.rsi_lean_low {
        SignalReason::new(format!("RSI {:.1} leaning oversold", rsi), 1)
    } else if rsi > policy.rsi_overbought {
        SignalReason::new(format!("RSI {:.1} overbought", rsi), -2)
    } else if rsi > policy.rsi_lean_high {
        SignalReason::new(format!("RSI {:.1} leaning overbought", rsi), -1)
    } else {
        SignalReason::new(format!("RSI {:.1} neutral", rsi), 0)
    }
}

pub fn macd_vote(macd: &MacdValue) -> SignalReason {
    if macd.histogram > 0.0 {
        SignalReason::new("MACD histogram positive", 1)
    } else if macd.histogram < 0.0 {
        SignalReason::new("MACD histogram negative", -1)
    } else {
        SignalReason::new("MACD flat", 0)
    }
}

pub fn price_sma_vote(price: f64, sma_short: f64) -> SignalReason {
    if price > sma_short {
        SignalReason::new("price above short SMA", 1)
    } else if price < sma_short {
        SignalReason::new("price below short SMA", -1)
    } else {
        SignalReason::new("price at short SMA", 0)
    }
}

pub fn sma_cross_vote(sma_short: f64, sma_long: f64) -> SignalReason {
    if sma_short > sma_long {
        SignalReason::new("short SMA above long SMA", 1)
    } else if sma_short < sma_long {
        SignalReason::new("short SMA below long SMA", -1)
    } else {
        SignalReason::new("SMAs converged", 0)
    }
}

/// Volume casts no directional vote; a spike only annotates the rationale.
pub fn volume_note(ratio: f64, policy: &SignalPolicy) -> Option<String> {
    (ratio >= policy.volume_spike).then(|| format!("volume spike {:.1}x average", ratio))
}
