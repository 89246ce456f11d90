//! CoinGecko-style crypto data client.

use crate::config::InstrumentSpec;
use crate::error::FetchError;
use crate::models::overview::{GlobalCryptoMetrics, TrendingAsset};
use crate::models::series::{PriceBar, PriceSeries, Quote};
use crate::services::market_data::{MarketDataSource, OverviewSource};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Deserialize)]
struct CoinMarketRow {
    id: String,
    symbol: String,
    name: String,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    #[serde(rename = "price_change_percentage_7d_in_currency")]
    price_change_percentage_7d: Option<f64>,
    market_cap: Option<f64>,
    total_volume: Option<f64>,
    market_cap_rank: Option<u32>,
}

impl CoinMarketRow {
    fn into_quote(self) -> Quote {
        let mut quote = Quote::new(
            &self.symbol.to_uppercase(),
            &self.name,
            self.current_price.unwrap_or(0.0),
            self.price_change_percentage_24h.unwrap_or(0.0),
            self.total_volume.unwrap_or(0.0),
        );
        if let Some(cap) = self.market_cap {
            quote = quote.with_market_cap(cap);
        }
        if let Some(rank) = self.market_cap_rank {
            quote = quote.with_rank(rank);
        }
        if let Some(change) = self.price_change_percentage_7d {
            quote = quote.with_change_7d(change);
        }
        quote
    }
}

#[derive(Debug, Deserialize)]
struct GlobalEnvelope {
    data: GlobalData,
}

#[derive(Debug, Deserialize)]
struct GlobalData {
    #[serde(default)]
    total_market_cap: std::collections::HashMap<String, f64>,
    #[serde(default)]
    total_volume: std::collections::HashMap<String, f64>,
    #[serde(default)]
    market_cap_percentage: std::collections::HashMap<String, f64>,
    market_cap_change_percentage_24h_usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TrendingEnvelope {
    #[serde(default)]
    coins: Vec<TrendingItem>,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    item: TrendingCoin,
}

#[derive(Debug, Deserialize)]
struct TrendingCoin {
    #[serde(default)]
    id: String,
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    name: String,
    market_cap_rank: Option<u32>,
    data: Option<TrendingCoinData>,
}

#[derive(Debug, Deserialize)]
struct TrendingCoinData {
    price_change_percentage_24h: Option<std::collections::HashMap<String, f64>>,
}

pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
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

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
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
        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn markets(&self, query: &str) -> Result<Vec<Quote>, FetchError> {
        let rows: Vec<CoinMarketRow> = self
            .get_json(&format!(
                "coins/markets?vs_currency=usd&sparkline=false&price_change_percentage=24h,7d&{}",
                query
            ))
            .await?;
        Ok(rows.into_iter().map(CoinMarketRow::into_quote).collect())
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// OHLC granularity is coarse for long ranges; pick the smallest supported
/// day range covering the lookback.
fn days_for(lookback_bars: u32) -> u32 {
    match lookback_bars {
        0..=30 => 30,
        31..=90 => 90,
        91..=180 => 180,
        _ => 365,
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn fetch_quote(&self, spec: &InstrumentSpec) -> Result<Quote, FetchError> {
        let mut quotes = self.markets(&format!("ids={}", spec.id)).await?;
        if quotes.is_empty() {
            return Err(FetchError::Empty(spec.id.clone()));
        }
        let mut quote = quotes.remove(0);
        quote.name = spec.name.clone();
        Ok(quote)
    }

    async fn fetch_series(
        &self,
        spec: &InstrumentSpec,
        lookback_bars: u32,
    ) -> Result<PriceSeries, FetchError> {
        // [timestamp_ms, open, high, low, close]; the OHLC endpoint carries
        // no volume, so the volume-ratio indicator stays absent for crypto.
        let rows: Vec<Vec<f64>> = self
            .get_json(&format!(
                "coins/{}/ohlc?vs_currency=usd&days={}",
                spec.id,
                days_for(lookback_bars)
            ))
            .await?;
        if rows.is_empty() {
            return Err(FetchError::Empty(spec.id.clone()));
        }

        let mut bars = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() < 5 {
                return Err(FetchError::Malformed(format!(
                    "ohlc row with {} fields",
                    row.len()
                )));
            }
            let timestamp = DateTime::<Utc>::from_timestamp_millis(row[0] as i64)
                .ok_or_else(|| FetchError::Malformed(format!("bad timestamp {}", row[0])))?;
            bars.push(PriceBar::new(timestamp, row[1], row[2], row[3], row[4], 0.0));
        }
        debug!(id = %spec.id, bars = bars.len(), "fetched ohlc history");
        PriceSeries::new(bars).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl OverviewSource for CoinGeckoClient {
    async fn top_assets(&self) -> Result<Vec<Quote>, FetchError> {
        let quotes = self
            .markets("order=market_cap_desc&per_page=10&page=1")
            .await?;
        if quotes.is_empty() {
            return Err(FetchError::Empty("top assets".to_string()));
        }
        Ok(quotes)
    }

    async fn global_crypto(&self) -> Result<GlobalCryptoMetrics, FetchError> {
        let envelope: GlobalEnvelope = self.get_json("global").await?;
        let data = envelope.data;
        Ok(GlobalCryptoMetrics {
            total_market_cap: data.total_market_cap.values().sum(),
            total_volume_24h: data.total_volume.values().sum(),
            btc_dominance: data.market_cap_percentage.get("btc").copied().unwrap_or(0.0),
            eth_dominance: data.market_cap_percentage.get("eth").copied(),
            market_cap_change_24h: data.market_cap_change_percentage_24h_usd,
        })
    }

    async fn trending(&self) -> Result<Vec<TrendingAsset>, FetchError> {
        let envelope: TrendingEnvelope = self.get_json("search/trending").await?;
        Ok(envelope
            .coins
            .into_iter()
            .map(|entry| {
                let coin = entry.item;
                let change_24h = coin
                    .data
                    .and_then(|d| d.price_change_percentage_24h)
                    .and_then(|by_ccy| by_ccy.get("usd").copied());
                TrendingAsset {
                    id: coin.id,
                    symbol: coin.symbol.to_uppercase(),
                    name: coin.name,
                    rank: coin.market_cap_rank,
                    change_24h,
                }
            })
            .collect())
    }
}
