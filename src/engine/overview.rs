//! Broad-market overview aggregation.
//!
//! Each enabled sub-section is fetched independently; a failure leaves only
//! that section absent and is recorded, never aborting the overview.

use crate::config::SectionToggles;
use crate::models::overview::MarketOverview;
use crate::services::OverviewSource;
use std::sync::Arc;
use tracing::warn;

pub struct OverviewAggregator {
    source: Arc<dyn OverviewSource>,
    sections: SectionToggles,
}

impl OverviewAggregator {
    pub fn new(source: Arc<dyn OverviewSource>, sections: SectionToggles) -> Self {
        Self { source, sections }
    }

    /// Collect all enabled sections. Returns the overview plus the error
    /// strings for any section that failed.
    pub async fn collect(&self) -> (MarketOverview, Vec<String>) {
        let mut overview = MarketOverview::default();
        let mut errors = Vec::new();

        if self.sections.benchmarks {
            match self.source.benchmarks().await {
                Ok(benchmarks) => overview.benchmarks = Some(benchmarks),
                Err(e) => {
                    warn!(error = %e, "benchmarks section failed");
                    errors.push(format!("Market overview unavailable: {}", e));
                }
            }
        }

        if self.sections.sectors {
            match self.source.sectors().await {
                Ok(sectors) => overview.sectors = Some(sectors),
                Err(e) => {
                    warn!(error = %e, "sectors section failed");
                    errors.push(format!("Sector data unavailable: {}", e));
                }
            }
        }

        if self.sections.top_movers {
            match self.source.top_movers().await {
                Ok((gainers, losers)) => {
                    overview.gainers = Some(gainers);
                    overview.losers = Some(losers);
                }
                Err(e) => {
                    warn!(error = %e, "top movers section failed");
                    errors.push(format!("Top movers unavailable: {}", e));
                }
            }
        }

        if self.sections.top_assets {
            match self.source.top_assets().await {
                Ok(assets) => overview.top_assets = Some(assets),
                Err(e) => {
                    warn!(error = %e, "top assets section failed");
                    errors.push(format!("Top assets unavailable: {}", e));
                }
            }
        }

        if self.sections.global_crypto {
            match self.source.global_crypto().await {
                Ok(global) => overview.global_crypto = Some(global),
                Err(e) => {
                    warn!(error = %e, "global crypto section failed");
                    errors.push(format!("Global crypto data unavailable: {}", e));
                }
            }
        }

        if self.sections.fear_greed {
            match self.source.fear_greed().await {
                Ok(index) => overview.fear_greed = Some(index),
                Err(e) => {
                    warn!(error = %e, "fear & greed section failed");
                    errors.push(format!("Fear & Greed unavailable: {}", e));
                }
            }
        }

        if self.sections.trending {
            match self.source.trending().await {
                Ok(trending) => overview.trending = Some(trending),
                Err(e) => {
                    warn!(error = %e, "trending section failed");
                    errors.push(format!("Trending unavailable: {}", e));
                }
            }
        }

        (overview, errors)
    }
}
