//! Stock Market Brief
//!
//! Fetches the configured watchlist, evaluates indicators and signals,
//! assembles the daily report and delivers it via Telegram. With
//! `--dry-run` the rendered brief is printed instead of sent.

use dotenvy::dotenv;
use marketbrief::config::{self, AppConfig};
use marketbrief::engine::{assemble_report, Orchestrator, OverviewAggregator};
use marketbrief::formatters::{format_stock_report, strip_html};
use marketbrief::logging;
use marketbrief::notifiers::TelegramNotifier;
use marketbrief::services::yahoo::YahooClient;
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

    info!("Starting Stock Market Brief");
    info!(environment = %config::get_environment(), dry_run, "Environment");

    let path = config::resolve_config_path(config_path);
    let app = AppConfig::load(&path, !dry_run)?;
    let stock = app.stock;
    info!(watchlist = stock.watchlist.len(), "Config loaded from {}", path.display());

    let client = Arc::new(YahooClient::new());
    let orchestrator = Orchestrator::new(
        client.clone(),
        stock.indicators.clone(),
        stock.policy.clone(),
        stock.run.clone(),
    );
    let (results, status) = orchestrator.run(&stock.watchlist).await;

    let mut sections = stock.sections.clone();
    // Crypto-only sections never apply to the stock brief.
    sections.top_assets = false;
    sections.global_crypto = false;
    sections.fear_greed = false;
    sections.trending = false;
    let aggregator = OverviewAggregator::new(client, sections);
    let (overview, overview_errors) = aggregator.collect().await;

    let report = assemble_report(results, status, overview, overview_errors);
    let message = format_stock_report(&report);

    if dry_run {
        println!("{}", "=".repeat(60));
        println!("STOCK MARKET DAILY BRIEF (DRY RUN)");
        println!("{}", "=".repeat(60));
        println!("{}", strip_html(&message));
        println!("{}", "=".repeat(60));
        println!("Raw HTML length: {} chars", message.len());
    } else {
        let notifier = TelegramNotifier::new(&app.telegram.bot_token, &app.telegram.chat_id);
        if report.status.is_fatal() {
            let _ = notifier
                .send_error(&format!(
                    "Stock brief failed: 0/{} tickers succeeded",
                    report.attempted
                ))
                .await;
        } else if let Err(e) = notifier.send_message(&message).await {
            error!(error = %e, "Failed to send Telegram message");
            return Err(e.into());
        } else {
            info!(chars = message.len(), "Stock brief sent successfully");
        }
    }

    if report.status.is_fatal() {
        error!(attempted = report.attempted, "all instruments failed");
        std::process::exit(1);
    }
    Ok(())
}
