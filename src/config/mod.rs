//! Typed configuration loaded once at startup from YAML plus environment
//! variables, then consumed as immutable values by the orchestrator.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// One configured instrument. For stocks `id == symbol`; for crypto `id` is
/// the upstream asset id (e.g. "bitcoin") and `symbol` the display ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

impl InstrumentSpec {
    pub fn stock(symbol: &str, name: &str) -> Self {
        Self {
            id: symbol.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    pub fn coin(id: &str, symbol: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }
}

/// Indicator window parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub sma_short: usize,
    pub sma_long: usize,
    pub volume_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            sma_short: 20,
            sma_long: 50,
            volume_window: 20,
        }
    }
}

/// Tunable cutoffs for the signal aggregator's vote policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalPolicy {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// RSI below this (but above oversold) leans bullish.
    pub rsi_lean_low: f64,
    /// RSI above this (but below overbought) leans bearish.
    pub rsi_lean_high: f64,
    pub strong_buy_min: i32,
    pub buy_min: i32,
    pub sell_max: i32,
    pub strong_sell_max: i32,
    /// Volume ratio above this is called out as a spike in the rationale.
    pub volume_spike: f64,
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            rsi_lean_low: 45.0,
            rsi_lean_high: 55.0,
            strong_buy_min: 3,
            buy_min: 1,
            sell_max: -1,
            strong_sell_max: -3,
            volume_spike: 2.0,
        }
    }
}

/// Per-run execution parameters for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParameters {
    /// Bars of history to request per instrument.
    pub lookback_bars: u32,
    /// Concurrent fetch-and-evaluate tasks; caps upstream request pressure.
    pub concurrency: usize,
    /// Run-level timeout in seconds; 0 disables it.
    pub timeout_seconds: u64,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            lookback_bars: 90,
            concurrency: 4,
            timeout_seconds: 120,
        }
    }
}

impl RunParameters {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

/// Toggles for the overview sub-sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub benchmarks: bool,
    pub sectors: bool,
    pub top_movers: bool,
    pub top_assets: bool,
    pub global_crypto: bool,
    pub fear_greed: bool,
    pub trending: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            benchmarks: true,
            sectors: true,
            top_movers: true,
            top_assets: true,
            global_crypto: true,
            fear_greed: true,
            trending: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockConfig {
    pub watchlist: Vec<InstrumentSpec>,
    #[serde(default)]
    pub indicators: IndicatorConfig,
    #[serde(default)]
    pub policy: SignalPolicy,
    #[serde(default)]
    pub run: RunParameters,
    #[serde(default)]
    pub sections: SectionToggles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoConfig {
    pub portfolio: Vec<InstrumentSpec>,
    #[serde(default)]
    pub indicators: IndicatorConfig,
    #[serde(default)]
    pub policy: SignalPolicy,
    #[serde(default)]
    pub run: RunParameters,
    #[serde(default)]
    pub sections: SectionToggles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    #[serde(default)]
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub stock: StockConfig,
    pub crypto: CryptoConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl AppConfig {
    /// Load the YAML config and overlay Telegram credentials from the
    /// environment. With `require_telegram` set, missing credentials are a
    /// startup error; dry runs pass `false`.
    pub fn load(path: &Path, require_telegram: bool) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: AppConfig = serde_yaml::from_str(&raw)?;

        config.telegram.bot_token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        config.telegram.chat_id = env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

        config.validate(require_telegram)?;
        Ok(config)
    }

    fn validate(&self, require_telegram: bool) -> Result<(), ConfigError> {
        if self.stock.watchlist.is_empty() && self.crypto.portfolio.is_empty() {
            return Err(ConfigError::Invalid(
                "both stock.watchlist and crypto.portfolio are empty".to_string(),
            ));
        }
        for cfg in [&self.stock.indicators, &self.crypto.indicators] {
            if cfg.macd_fast >= cfg.macd_slow {
                return Err(ConfigError::Invalid(format!(
                    "macd_fast ({}) must be shorter than macd_slow ({})",
                    cfg.macd_fast, cfg.macd_slow
                )));
            }
            if cfg.sma_short >= cfg.sma_long {
                return Err(ConfigError::Invalid(format!(
                    "sma_short ({}) must be shorter than sma_long ({})",
                    cfg.sma_short, cfg.sma_long
                )));
            }
        }
        if require_telegram {
            if self.telegram.bot_token.trim().is_empty() {
                return Err(ConfigError::MissingEnv("TELEGRAM_BOT_TOKEN"));
            }
            if self.telegram.chat_id.trim().is_empty() {
                return Err(ConfigError::MissingEnv("TELEGRAM_CHAT_ID"));
            }
        }
        Ok(())
    }
}

/// Default config path: `config/config.yaml`, falling back to the checked-in
/// example when no local config exists.
pub fn resolve_config_path(explicit: Option<std::path::PathBuf>) -> std::path::PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let local = std::path::PathBuf::from("config/config.yaml");
    if local.exists() {
        local
    } else {
        std::path::PathBuf::from("config/config.example.yaml")
    }
}

/// Deployment environment from `APP_ENV`, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
