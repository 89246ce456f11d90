//! Unit tests for the briefing renderers and text helpers

use chrono::{TimeZone, Utc};
use marketbrief::error::InstrumentError;
use marketbrief::formatters::{
    change_arrow, escape_html, format_crypto_report, format_number, format_stock_report,
    rsi_label, signal_marker, strip_html, SECTION_SEPARATOR,
};
use marketbrief::models::indicators::{IndicatorSet, MacdValue};
use marketbrief::models::overview::{
    BenchmarkQuote, FearGreedIndex, GlobalCryptoMetrics, MarketOverview, Mover, SectorPerformance,
    TrendingAsset,
};
use marketbrief::models::report::{InstrumentResult, Report, RunStatus};
use marketbrief::models::series::Quote;
use marketbrief::models::signal::Signal;

fn base_report() -> Report {
    Report {
        timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 7, 30, 0).unwrap(),
        instruments: Vec::new(),
        overview: MarketOverview::default(),
        status: RunStatus::Complete,
        attempted: 0,
        succeeded: 0,
        errors: Vec::new(),
    }
}

fn evaluated(symbol: &str, name: &str, price: f64) -> InstrumentResult {
    let set = IndicatorSet::default()
        .with_rsi(74.2)
        .with_macd(MacdValue {
            line: 1.2,
            signal: 0.8,
            histogram: 0.4,
        })
        .with_sma_short(price * 0.95)
        .with_sma_long(price * 0.90)
        .with_volume_ratio(2.3);
    InstrumentResult::evaluated(
        symbol,
        Quote::new(symbol, name, price, 1.8, 52_000_000.0),
        set,
        Signal::Sell,
        "vote -1: RSI 74.2 overbought, MACD histogram positive".to_string(),
    )
}

#[test]
fn escape_html_covers_telegram_specials() {
    assert_eq!(escape_html("A&B <tag>"), "A&amp;B &lt;tag&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn strip_html_inverts_escaping_and_drops_tags() {
    let html = "<b>S&amp;P 500</b>: <i>up</i> &lt;1%";
    assert_eq!(strip_html(html), "S&P 500: up <1%");
}

#[test]
fn format_number_picks_the_right_suffix() {
    assert_eq!(format_number(951.0, "$"), "$951.00");
    assert_eq!(format_number(12_400.0, ""), "12.4K");
    assert_eq!(format_number(3_200_000.0, "$"), "$3.2M");
    assert_eq!(format_number(1_850_000_000.0, "$"), "$1.9B");
    assert_eq!(format_number(2_400_000_000_000.0, "$"), "$2.4T");
}

#[test]
fn change_arrow_signs_gains_explicitly() {
    assert_eq!(change_arrow(2.5), "+2.50%");
    assert_eq!(change_arrow(-1.25), "-1.25%");
    assert_eq!(change_arrow(0.0), "0.00%");
}

#[test]
fn rsi_label_bands() {
    assert_eq!(rsi_label(None), "N/A");
    assert_eq!(rsi_label(Some(75.0)), "75.0 (Overbought)");
    assert_eq!(rsi_label(Some(25.0)), "25.0 (Oversold)");
    assert_eq!(rsi_label(Some(50.0)), "50.0 (Neutral)");
}

#[test]
fn every_signal_has_a_marker() {
    for signal in [
        Signal::StrongBuy,
        Signal::Buy,
        Signal::Neutral,
        Signal::Sell,
        Signal::StrongSell,
        Signal::Unknown,
    ] {
        assert!(!signal_marker(signal).is_empty());
    }
}

#[test]
fn stock_report_renders_watchlist_and_overview() {
    let mut report = base_report();
    report.attempted = 2;
    report.succeeded = 2;
    report.instruments = vec![
        evaluated("AAPL", "Apple Inc.", 182.5),
        evaluated("MSFT", "Microsoft", 410.0),
    ];
    report.overview.benchmarks = Some(vec![BenchmarkQuote {
        name: "S&P 500".to_string(),
        symbol: "SPY".to_string(),
        price: 512.34,
        change_percent: 0.42,
    }]);
    report.overview.sectors = Some(vec![SectorPerformance {
        name: "Technology".to_string(),
        symbol: "XLK".to_string(),
        change_percent: 1.2,
    }]);
    report.overview.gainers = Some(vec![Mover {
        symbol: "NVDA".to_string(),
        name: "NVIDIA".to_string(),
        change_percent: 5.1,
    }]);

    let out = format_stock_report(&report);

    assert!(out.starts_with("<b>Stock Market Daily Brief</b>"));
    assert!(out.contains("2/2 tickers loaded"));
    assert!(out.contains("<b>YOUR WATCHLIST</b>"));
    assert!(out.contains("<b>AAPL</b> - Apple Inc."));
    assert!(out.contains("RSI: 74.2 (Overbought)"));
    assert!(out.contains("MACD: Bullish crossover"));
    assert!(out.contains("Volume: 52.0M (2.3x average)"));
    assert!(out.contains("Signal: 🔴 <b>Sell</b>"));
    // Benchmark name must be escaped in Telegram HTML.
    assert!(out.contains("S&amp;P 500: $512.34 (+0.42%)"));
    assert!(out.contains("1. Technology: +1.20%"));
    assert!(out.contains("Gainers: NVDA +5.10%"));
    assert!(!out.contains("<b>ISSUES</b>"));
}

#[test]
fn stock_report_prints_failure_cause_inline() {
    let mut report = base_report();
    report.attempted = 2;
    report.succeeded = 1;
    report.status = RunStatus::PartialFailure;
    report.instruments = vec![
        evaluated("AAPL", "Apple Inc.", 182.5),
        InstrumentResult::failed("TSLA", InstrumentError::NoData),
    ];
    report.errors = vec!["TSLA: no price history returned".to_string()];

    let out = format_stock_report(&report);

    assert!(out.contains("<b>TSLA</b>: no price history returned"));
    assert!(out.contains("<b>ISSUES</b>"));
    assert!(out.contains("- TSLA: no price history returned"));
}

#[test]
fn crypto_report_renders_portfolio_and_sentiment() {
    let mut report = base_report();
    report.attempted = 1;
    report.succeeded = 1;
    let quote = Quote::new("BTC", "Bitcoin", 64_250.0, 2.1, 38_000_000_000.0)
        .with_rank(1)
        .with_market_cap(1_260_000_000_000.0)
        .with_change_7d(-3.4);
    report.instruments = vec![InstrumentResult::evaluated(
        "bitcoin",
        quote,
        IndicatorSet::default().with_rsi(55.0),
        Signal::Neutral,
        "vote +0: RSI 55.0 neutral".to_string(),
    )];
    report.overview.global_crypto = Some(GlobalCryptoMetrics {
        total_market_cap: 2_400_000_000_000.0,
        total_volume_24h: 98_000_000_000.0,
        btc_dominance: 52.3,
        eth_dominance: Some(17.1),
        market_cap_change_24h: Some(1.4),
    });
    report.overview.fear_greed = Some(FearGreedIndex {
        value: 71,
        label: "Greed".to_string(),
        timestamp: None,
    });
    report.overview.trending = Some(vec![TrendingAsset {
        id: "pepe".to_string(),
        symbol: "PEPE".to_string(),
        name: "Pepe".to_string(),
        rank: None,
        change_24h: None,
    }]);

    let out = format_crypto_report(&report);

    assert!(out.starts_with("<b>Crypto Market Daily Brief</b>"));
    assert!(out.contains("<b>BTC</b> - Bitcoin #1"));
    assert!(out.contains("$64250.00 | 24h: +2.10%"));
    assert!(out.contains("7d: -3.40%"));
    assert!(out.contains("MCap: $1.3T"));
    assert!(out.contains("Total Market Cap: $2.4T"));
    assert!(out.contains("BTC Dominance: 52.3%"));
    assert!(out.contains("ETH Dominance: 17.1%"));
    assert!(out.contains("<b>FEAR &amp; GREED</b>\n71 - Greed [Greed]"));
    assert!(out.contains("<b>TRENDING</b>\nPEPE"));
}

#[test]
fn crypto_report_uses_more_decimals_below_a_dollar() {
    let mut report = base_report();
    report.attempted = 1;
    report.succeeded = 1;
    report.instruments = vec![InstrumentResult::evaluated(
        "dogecoin",
        Quote::new("DOGE", "Dogecoin", 0.1234, 0.0, 1_000_000.0),
        IndicatorSet::default(),
        Signal::Unknown,
        "no indicators available (insufficient history)".to_string(),
    )];

    let out = format_crypto_report(&report);
    assert!(out.contains("$0.1234 | 24h: 0.00%"));
}

#[test]
fn sections_are_separated_by_blank_lines() {
    let mut report = base_report();
    report.overview.benchmarks = Some(vec![BenchmarkQuote {
        name: "Dow Jones".to_string(),
        symbol: "DIA".to_string(),
        price: 390.0,
        change_percent: -0.1,
    }]);

    let out = format_stock_report(&report);
    let sections: Vec<&str> = out.split(SECTION_SEPARATOR).collect();
    assert_eq!(sections.len(), 2);
    assert!(sections[1].starts_with("<b>MARKET OVERVIEW</b>"));
}

#[test]
fn stripped_stock_report_is_console_safe() {
    let mut report = base_report();
    report.attempted = 1;
    report.succeeded = 1;
    report.instruments = vec![evaluated("AAPL", "Apple Inc.", 182.5)];

    let plain = strip_html(&format_stock_report(&report));
    assert!(!plain.contains('<'));
    assert!(plain.contains("Stock Market Daily Brief"));
    assert!(plain.contains("AAPL - Apple Inc."));
}
