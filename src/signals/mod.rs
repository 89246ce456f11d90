//! Signal reduction: indicator votes and the aggregated recommendation.

pub mod aggregator;
pub mod votes;

pub use aggregator::SignalAggregator;
