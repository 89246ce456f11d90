//! Reduces an instrument's indicator set to one discrete signal.

use crate::config::SignalPolicy;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::{Signal, SignalReason};
use crate::signals::votes;

pub struct SignalAggregator {
    policy: SignalPolicy,
}

impl SignalAggregator {
    pub fn new(policy: SignalPolicy) -> Self {
        Self { policy }
    }

    /// Sum the available indicators' votes and map the total through the
    /// policy thresholds. Absent indicators simply do not vote; with zero
    /// voters the signal is `Unknown`, never `Neutral`.
    pub fn evaluate(&self, price: Option<f64>, set: &IndicatorSet) -> (Signal, String) {
        let mut reasons: Vec<SignalReason> = Vec::new();

        if let Some(rsi) = set.rsi {
            reasons.push(votes::rsi_vote(rsi, &self.policy));
        }
        if let Some(ref macd) = set.macd {
            reasons.push(votes::macd_vote(macd));
        }
        if let (Some(price), Some(sma_short)) = (price, set.sma_short) {
            reasons.push(votes::price_sma_vote(price, sma_short));
        }
        if let (Some(short), Some(long)) = (set.sma_short, set.sma_long) {
            reasons.push(votes::sma_cross_vote(short, long));
        }

        if reasons.is_empty() {
            return (
                Signal::Unknown,
                "no indicators available (insufficient history)".to_string(),
            );
        }

        let total: i32 = reasons.iter().map(|r| i32::from(r.vote)).sum();
        let signal = self.map_total(total);

        let mut fragments: Vec<String> =
            reasons.into_iter().map(|r| r.description).collect();
        if let Some(note) = set
            .volume_ratio
            .and_then(|ratio| votes::volume_note(ratio, &self.policy))
        {
            fragments.push(note);
        }
        let rationale = format!("vote {:+}: {}", total, fragments.join(", "));

        (signal, rationale)
    }

    /// Threshold mapping. Totals between `sell_max` and `buy_min` resolve to
    /// Neutral, so ties never land on a directional extreme.
    fn map_total(&self, total: i32) -> Signal {
        if total >= self.policy.strong_buy_min {
            Signal::StrongBuy
        } else if total >= self.policy.buy_min {
            Signal::Buy
        } else if total <= self.policy.strong_sell_max {
            Signal::StrongSell
        } else if total <= self.policy.sell_max {
            Signal::Sell
        } else {
            Signal::Neutral
        }
    }
}
