//! Error kinds shared across the engine and its collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to retrieve data from an upstream API.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response shape: {0}")]
    Malformed(String),

    #[error("no data returned for {0}")]
    Empty(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

/// Failure to compute a single indicator. Callers degrade to "field absent"
/// rather than failing the instrument.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("insufficient data: need {required} bars, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("average volume over the window is zero")]
    ZeroAverageVolume,
}

/// Per-instrument failure recorded in the report instead of propagating.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum InstrumentError {
    #[error("data fetch failed: {0}")]
    Fetch(String),

    #[error("no price history returned")]
    NoData,

    #[error("aborted by run timeout")]
    Timeout,
}

impl From<FetchError> for InstrumentError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Empty(_) => InstrumentError::NoData,
            other => InstrumentError::Fetch(other.to_string()),
        }
    }
}

/// Configuration loading/validation failure, fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("environment variable {0} is empty or not set")]
    MissingEnv(&'static str),
}

/// Failure to deliver a rendered briefing.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("telegram rejected the message (status {status}): {description}")]
    Rejected { status: u16, description: String },
}
