//! Unit tests for the overview aggregator's per-section failure discipline

use async_trait::async_trait;
use marketbrief::config::SectionToggles;
use marketbrief::engine::OverviewAggregator;
use marketbrief::error::FetchError;
use marketbrief::models::overview::{BenchmarkQuote, FearGreedIndex, Mover, SectorPerformance};
use marketbrief::services::OverviewSource;
use std::collections::HashSet;
use std::sync::Arc;

/// Stock-shaped overview source where named sections fail.
#[derive(Default)]
struct StockSections {
    fail: HashSet<&'static str>,
}

impl StockSections {
    fn failing(mut self, section: &'static str) -> Self {
        self.fail.insert(section);
        self
    }

    fn check(&self, section: &'static str) -> Result<(), FetchError> {
        if self.fail.contains(section) {
            return Err(FetchError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OverviewSource for StockSections {
    async fn benchmarks(&self) -> Result<Vec<BenchmarkQuote>, FetchError> {
        self.check("benchmarks")?;
        Ok(vec![BenchmarkQuote {
            name: "S&P 500".to_string(),
            symbol: "SPY".to_string(),
            price: 512.3,
            change_percent: 0.4,
        }])
    }

    async fn sectors(&self) -> Result<Vec<SectorPerformance>, FetchError> {
        self.check("sectors")?;
        Ok(vec![SectorPerformance {
            name: "Technology".to_string(),
            symbol: "XLK".to_string(),
            change_percent: 1.2,
        }])
    }

    async fn top_movers(&self) -> Result<(Vec<Mover>, Vec<Mover>), FetchError> {
        self.check("top_movers")?;
        let gainer = Mover {
            symbol: "NVDA".to_string(),
            name: "NVIDIA".to_string(),
            change_percent: 5.1,
        };
        let loser = Mover {
            symbol: "INTC".to_string(),
            name: "Intel".to_string(),
            change_percent: -3.4,
        };
        Ok((vec![gainer], vec![loser]))
    }
}

fn stock_toggles() -> SectionToggles {
    SectionToggles {
        top_assets: false,
        global_crypto: false,
        fear_greed: false,
        trending: false,
        ..SectionToggles::default()
    }
}

#[tokio::test]
async fn all_sections_fill_when_healthy() {
    let agg = OverviewAggregator::new(Arc::new(StockSections::default()), stock_toggles());
    let (overview, errors) = agg.collect().await;

    assert!(errors.is_empty());
    assert!(overview.benchmarks.is_some());
    assert!(overview.sectors.is_some());
    assert!(overview.gainers.is_some());
    assert!(overview.losers.is_some());
    assert!(overview.fear_greed.is_none());
}

#[tokio::test]
async fn one_failed_section_leaves_the_rest_intact() {
    let source = StockSections::default().failing("sectors");
    let agg = OverviewAggregator::new(Arc::new(source), stock_toggles());
    let (overview, errors) = agg.collect().await;

    assert!(overview.benchmarks.is_some());
    assert!(overview.sectors.is_none());
    assert!(overview.gainers.is_some());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Sector data unavailable"));
}

#[tokio::test]
async fn every_section_failing_yields_empty_overview() {
    let source = StockSections::default()
        .failing("benchmarks")
        .failing("sectors")
        .failing("top_movers");
    let agg = OverviewAggregator::new(Arc::new(source), stock_toggles());
    let (overview, errors) = agg.collect().await;

    assert!(overview.is_empty());
    assert_eq!(errors.len(), 3);
}

#[tokio::test]
async fn disabled_sections_are_never_fetched() {
    // Disabled sections cannot contribute an error even when they would fail.
    let source = StockSections::default().failing("sectors");
    let toggles = SectionToggles {
        sectors: false,
        ..stock_toggles()
    };
    let agg = OverviewAggregator::new(Arc::new(source), toggles);
    let (overview, errors) = agg.collect().await;

    assert!(errors.is_empty());
    assert!(overview.sectors.is_none());
    assert!(overview.benchmarks.is_some());
}

#[tokio::test]
async fn default_trait_sections_report_unsupported() {
    // A source that implements nothing falls back to the trait defaults.
    struct Bare;
    #[async_trait]
    impl OverviewSource for Bare {}

    let agg = OverviewAggregator::new(Arc::new(Bare), SectionToggles::default());
    let (overview, errors) = agg.collect().await;

    assert!(overview.is_empty());
    assert_eq!(errors.len(), 7);
}

#[tokio::test]
async fn fear_greed_section_flows_through() {
    struct Sentiment;
    #[async_trait]
    impl OverviewSource for Sentiment {
        async fn fear_greed(&self) -> Result<FearGreedIndex, FetchError> {
            Ok(FearGreedIndex {
                value: 71,
                label: "Greed".to_string(),
                timestamp: None,
            })
        }
    }

    let toggles = SectionToggles {
        benchmarks: false,
        sectors: false,
        top_movers: false,
        top_assets: false,
        global_crypto: false,
        fear_greed: true,
        trending: false,
    };
    let agg = OverviewAggregator::new(Arc::new(Sentiment), toggles);
    let (overview, errors) = agg.collect().await;

    assert!(errors.is_empty());
    let index = overview.fear_greed.unwrap();
    assert_eq!(index.value, 71);
    assert_eq!(index.label, "Greed");
}
