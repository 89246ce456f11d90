//! Market briefing engine: indicator math, signal aggregation and the run
//! orchestrator behind the periodic stock/crypto Telegram briefs.

pub mod config;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod notifiers;
pub mod services;
pub mod signals;
