//! Crypto Market Brief
//!
//! Fetches the configured portfolio, evaluates indicators and signals,
//! assembles the daily report and delivers it via Telegram. With
//! `--dry-run` the rendered brief is printed instead of sent.

use dotenvy::dotenv;
use marketbrief::config::{self, AppConfig};
use marketbrief::engine::{assemble_report, Orchestrator, OverviewAggregator};
use marketbrief::formatters::{format_crypto_report, strip_html};
use marketbrief::logging;
use marketbrief::notifiers::TelegramNotifier;
use marketbrief::services::coingecko::CoinGeckoClient;
use marketbrief::services::fear_greed::FearGreedClient;
use marketbrief::services::CryptoOverviewSource;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let dry_run = args.iter().any(|a| a == "--dry-run");
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    info!("Starting Crypto Market Brief");
    info!(environment = %config::get_environment(), dry_run, "Environment");

    let path = config::resolve_config_path(config_path);
    let app = AppConfig::load(&path, !dry_run)?;
    let crypto = app.crypto;
    info!(portfolio = crypto.portfolio.len(), "Config loaded from {}", path.display());

    let client = Arc::new(CoinGeckoClient::new());
    let orchestrator = Orchestrator::new(
        client.clone(),
        crypto.indicators.clone(),
        crypto.policy.clone(),
        crypto.run.clone(),
    );
    let (results, status) = orchestrator.run(&crypto.portfolio).await;

    let mut sections = crypto.sections.clone();
    // Equity-only sections never apply to the crypto brief.
    sections.benchmarks = false;
    sections.sectors = false;
    sections.top_movers = false;
    let overview_source = Arc::new(CryptoOverviewSource::new(client, FearGreedClient::new()));
    let aggregator = OverviewAggregator::new(overview_source, sections);
    let (overview, overview_errors) = aggregator.collect().await;

    let report = assemble_report(results, status, overview, overview_errors);
    let message = format_crypto_report(&report);

    if dry_run {
        println!("{}", "=".repeat(60));
        println!("CRYPTO MARKET DAILY BRIEF (DRY RUN)");
        println!("{}", "=".repeat(60));
        println!("{}", strip_html(&message));
        println!("{}", "=".repeat(60));
        println!("Raw HTML length: {} chars", message.len());
    } else {
        let notifier = TelegramNotifier::new(&app.telegram.bot_token, &app.telegram.chat_id);
        if report.status.is_fatal() {
            let _ = notifier
                .send_error(&format!(
                    "Crypto brief failed: 0/{} coins succeeded",
                    report.attempted
                ))
                .await;
        } else if let Err(e) = notifier.send_message(&message).await {
            error!(error = %e, "Failed to send Telegram message");
            return Err(e.into());
        } else {
            info!(chars = message.len(), "Crypto brief sent successfully");
        }
    }

    if report.status.is_fatal() {
        error!(attempted = report.attempted, "all instruments failed");
        std::process::exit(1);
    }
    Ok(())
}
