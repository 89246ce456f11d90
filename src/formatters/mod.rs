//! HTML briefing renderers for Telegram.

pub mod crypto;
pub mod stock;

pub use crypto::format_crypto_report;
pub use stock::format_stock_report;

use crate::models::signal::Signal;

pub const SECTION_SEPARATOR: &str = "\n\n";

/// Escape the characters Telegram HTML requires: `&`, `<`, `>`.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Abbreviate large numbers with K/M/B/T suffixes.
pub fn format_number(n: f64, prefix: &str) -> String {
    let abs = n.abs();
    if abs >= 1e12 {
        format!("{}{:.1}T", prefix, n / 1e12)
    } else if abs >= 1e9 {
        format!("{}{:.1}B", prefix, n / 1e9)
    } else if abs >= 1e6 {
        format!("{}{:.1}M", prefix, n / 1e6)
    } else if abs >= 1e3 {
        format!("{}{:.1}K", prefix, n / 1e3)
    } else {
        format!("{}{:.2}", prefix, n)
    }
}

/// Signed percentage, explicit plus for gains.
pub fn change_arrow(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

pub fn rsi_label(rsi: Option<f64>) -> String {
    match rsi {
        None => "N/A".to_string(),
        Some(v) if v >= 70.0 => format!("{:.1} (Overbought)", v),
        Some(v) if v <= 30.0 => format!("{:.1} (Oversold)", v),
        Some(v) => format!("{:.1} (Neutral)", v),
    }
}

pub fn macd_label(histogram: Option<f64>) -> &'static str {
    match histogram {
        None => "N/A",
        Some(h) if h > 0.0 => "Bullish crossover",
        Some(h) if h < 0.0 => "Bearish crossover",
        Some(_) => "Neutral",
    }
}

pub fn signal_marker(signal: Signal) -> &'static str {
    match signal {
        Signal::StrongBuy => "🟢🟢",
        Signal::Buy => "🟢",
        Signal::Neutral => "⚪",
        Signal::Sell => "🔴",
        Signal::StrongSell => "🔴🔴",
        Signal::Unknown => "❔",
    }
}

/// Strip HTML tags for console output and the plain-text fallback.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}
