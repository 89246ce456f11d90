//! Yahoo-style stock data client built on the v8 chart API.

use crate::config::InstrumentSpec;
use crate::error::FetchError;
use crate::models::overview::{BenchmarkQuote, Mover, SectorPerformance};
use crate::models::series::{PriceBar, PriceSeries, Quote};
use crate::services::market_data::{MarketDataSource, OverviewSource};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const MARKET_INDICES: &[(&str, &str)] = &[
    ("S&P 500", "SPY"),
    ("NASDAQ", "QQQ"),
    ("Dow Jones", "DIA"),
    ("Russell 2000", "IWM"),
];

const SECTOR_ETFS: &[(&str, &str)] = &[
    ("Technology", "XLK"),
    ("Healthcare", "XLV"),
    ("Financials", "XLF"),
    ("Consumer Disc.", "XLY"),
    ("Consumer Staples", "XLP"),
    ("Energy", "XLE"),
    ("Utilities", "XLU"),
    ("Industrials", "XLI"),
    ("Materials", "XLB"),
    ("Real Estate", "XLRE"),
    ("Communication", "XLC"),
];

/// Large-cap universe scanned for the top-movers section.
const MOVER_UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "JPM", "V", "UNH", "XOM", "PG",
    "MA", "HD", "CVX", "MRK", "KO", "COST", "AVGO", "LLY", "WMT", "MCD", "CSCO", "ORCL", "CRM",
    "AMD",
];

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
    chart_previous_close: Option<f64>,
    regular_market_volume: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

pub struct YahooClient {
    http: reqwest::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_client(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    async fn get_chart(&self, symbol: &str, range: &str) -> Result<ChartResult, FetchError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, range
        );

        let send = || async { self.http.get(&url).send().await };
        let response = send
            .retry(ExponentialBuilder::default().with_max_times(2))
            .when(|e: &reqwest::Error| e.is_timeout() || e.is_connect())
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let envelope: ChartEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        if let Some(error) = envelope.chart.error {
            if !error.is_null() {
                return Err(FetchError::Malformed(error.to_string()));
            }
        }
        envelope
            .chart
            .result
            .and_then(|mut r| (!r.is_empty()).then(|| r.remove(0)))
            .ok_or_else(|| FetchError::Empty(symbol.to_string()))
    }

    /// Quote from the chart meta: price, previous close and volume.
    async fn quote_for(&self, symbol: &str, name: &str) -> Result<Quote, FetchError> {
        let chart = self.get_chart(symbol, "5d").await?;
        let price = chart
            .meta
            .regular_market_price
            .filter(|p| *p > 0.0)
            .ok_or_else(|| FetchError::Malformed(format!("no market price for {}", symbol)))?;
        let prev = chart
            .meta
            .chart_previous_close
            .filter(|p| *p > 0.0)
            .ok_or_else(|| FetchError::Malformed(format!("no previous close for {}", symbol)))?;
        let change_percent = (price - prev) / prev * 100.0;
        let volume = chart.meta.regular_market_volume.unwrap_or(0.0);

        Ok(Quote::new(symbol, name, price, change_percent, volume))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

fn range_for(lookback_bars: u32) -> &'static str {
    match lookback_bars {
        0..=22 => "1mo",
        23..=66 => "3mo",
        67..=130 => "6mo",
        _ => "1y",
    }
}

fn bars_from_chart(chart: &ChartResult, symbol: &str) -> Result<Vec<PriceBar>, FetchError> {
    let timestamps = chart
        .timestamp
        .as_ref()
        .ok_or_else(|| FetchError::Empty(symbol.to_string()))?;
    let quote = chart
        .indicators
        .quote
        .first()
        .ok_or_else(|| FetchError::Empty(symbol.to_string()))?;

    let field = |values: &Option<Vec<Option<f64>>>, i: usize| -> Option<f64> {
        values.as_ref().and_then(|v| v.get(i).copied().flatten())
    };

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        // Bars with missing closes (halts, partial sessions) are skipped.
        let close = match field(&quote.close, i) {
            Some(c) => c,
            None => continue,
        };
        let timestamp = DateTime::<Utc>::from_timestamp(ts, 0)
            .ok_or_else(|| FetchError::Malformed(format!("bad timestamp {}", ts)))?;
        bars.push(PriceBar::new(
            timestamp,
            field(&quote.open, i).unwrap_or(close),
            field(&quote.high, i).unwrap_or(close),
            field(&quote.low, i).unwrap_or(close),
            close,
            field(&quote.volume, i).unwrap_or(0.0),
        ));
    }
    Ok(bars)
}

#[async_trait]
impl MarketDataSource for YahooClient {
    async fn fetch_quote(&self, spec: &InstrumentSpec) -> Result<Quote, FetchError> {
        self.quote_for(&spec.symbol, &spec.name).await
    }

    async fn fetch_series(
        &self,
        spec: &InstrumentSpec,
        lookback_bars: u32,
    ) -> Result<PriceSeries, FetchError> {
        let chart = self.get_chart(&spec.symbol, range_for(lookback_bars)).await?;
        let bars = bars_from_chart(&chart, &spec.symbol)?;
        debug!(symbol = %spec.symbol, bars = bars.len(), "fetched daily history");
        PriceSeries::new(bars).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl OverviewSource for YahooClient {
    async fn benchmarks(&self) -> Result<Vec<BenchmarkQuote>, FetchError> {
        let mut benchmarks = Vec::new();
        for (name, symbol) in MARKET_INDICES {
            match self.quote_for(symbol, name).await {
                Ok(quote) => benchmarks.push(BenchmarkQuote {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                    price: quote.price,
                    change_percent: quote.change_percent,
                }),
                Err(e) => warn!(symbol = %symbol, error = %e, "benchmark fetch failed"),
            }
        }
        if benchmarks.is_empty() {
            return Err(FetchError::Empty("market benchmarks".to_string()));
        }
        Ok(benchmarks)
    }

    async fn sectors(&self) -> Result<Vec<SectorPerformance>, FetchError> {
        let mut sectors = Vec::new();
        for (name, symbol) in SECTOR_ETFS {
            match self.quote_for(symbol, name).await {
                Ok(quote) => sectors.push(SectorPerformance {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                    change_percent: quote.change_percent,
                }),
                Err(e) => warn!(symbol = %symbol, error = %e, "sector fetch failed"),
            }
        }
        if sectors.is_empty() {
            return Err(FetchError::Empty("sector performance".to_string()));
        }
        sectors.sort_by(|a, b| {
            b.change_percent
                .partial_cmp(&a.change_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(sectors)
    }

    async fn top_movers(&self) -> Result<(Vec<Mover>, Vec<Mover>), FetchError> {
        const LIMIT: usize = 5;

        let mut movers = Vec::new();
        for symbol in MOVER_UNIVERSE {
            match self.quote_for(symbol, symbol).await {
                Ok(quote) => movers.push(Mover {
                    symbol: symbol.to_string(),
                    name: symbol.to_string(),
                    change_percent: quote.change_percent,
                }),
                Err(e) => debug!(symbol = %symbol, error = %e, "mover fetch failed"),
            }
        }
        if movers.is_empty() {
            return Err(FetchError::Empty("top movers".to_string()));
        }

        movers.sort_by(|a, b| {
            b.change_percent
                .partial_cmp(&a.change_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let gainers = movers.iter().take(LIMIT).cloned().collect();
        let losers = movers.iter().rev().take(LIMIT).cloned().collect();
        Ok((gainers, losers))
    }
}
