use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValue {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Indicator values for one instrument. Every field is optional: an
/// indicator that could not be computed (usually too little history) is
/// simply absent and excluded from signal voting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<f64>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdValue) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_sma_short(mut self, sma: f64) -> Self {
        self.sma_short = Some(sma);
        self
    }

    pub fn with_sma_long(mut self, sma: f64) -> Self {
        self.sma_long = Some(sma);
        self
    }

    pub fn with_volume_ratio(mut self, ratio: f64) -> Self {
        self.volume_ratio = Some(ratio);
        self
    }

    /// True when no indicator at all could be computed.
    pub fn is_empty(&self) -> bool {
        self.rsi.is_none()
            && self.macd.is_none()
            && self.sma_short.is_none()
            && self.sma_long.is_none()
            && self.volume_ratio.is_none()
    }
}
