//! HTML renderer for the crypto market brief.

use crate::formatters::{
    change_arrow, escape_html, format_number, macd_label, rsi_label, signal_marker,
    SECTION_SEPARATOR,
};
use crate::models::report::Report;

/// More decimals for sub-dollar assets.
fn format_price(price: f64) -> String {
    if price >= 1.0 {
        format!("${:.2}", price)
    } else if price >= 0.01 {
        format!("${:.4}", price)
    } else {
        format!("${:.6}", price)
    }
}

fn fear_greed_band(value: u8) -> &'static str {
    match value {
        0..=25 => "[Extreme Fear]",
        26..=45 => "[Fear]",
        46..=55 => "[Neutral]",
        56..=75 => "[Greed]",
        _ => "[Extreme Greed]",
    }
}

pub fn format_crypto_report(report: &Report) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<b>Crypto Market Daily Brief</b>\n<i>{}</i>\n{}/{} coins loaded",
        report.timestamp.format("%A, %b %d, %Y - %H:%M UTC"),
        report.succeeded,
        report.attempted,
    ));

    if !report.instruments.is_empty() {
        let mut lines = vec!["<b>YOUR PORTFOLIO</b>".to_string()];
        for result in &report.instruments {
            lines.push(String::new());
            let Some(ref quote) = result.quote else {
                let cause = result
                    .error
                    .as_ref()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "unavailable".to_string());
                lines.push(format!(
                    "<b>{}</b>: {}",
                    escape_html(&result.id),
                    escape_html(&cause)
                ));
                continue;
            };

            let rank = quote.rank.map(|r| format!(" #{}", r)).unwrap_or_default();
            lines.push(format!(
                "<b>{}</b> - {}{}",
                escape_html(&quote.symbol),
                escape_html(&quote.name),
                rank
            ));
            lines.push(format!(
                "{} | 24h: {}",
                format_price(quote.price),
                change_arrow(quote.change_percent)
            ));
            if let Some(change_7d) = quote.change_7d {
                lines.push(format!("7d: {}", change_arrow(change_7d)));
            }
            if let Some(cap) = quote.market_cap {
                lines.push(format!("MCap: {}", format_number(cap, "$")));
            }
            lines.push(format!("Vol 24h: {}", format_number(quote.volume, "$")));

            if let Some(ref ind) = result.indicators {
                lines.push(format!("RSI: {}", rsi_label(ind.rsi)));
                lines.push(format!(
                    "MACD: {}",
                    macd_label(ind.macd.as_ref().map(|m| m.histogram))
                ));
                if let Some(sma) = ind.sma_short {
                    let relation = if quote.price > sma { "Above" } else { "Below" };
                    lines.push(format!("SMA short: {} ({})", format_price(sma), relation));
                }
            }

            lines.push(format!(
                "Signal: {} <b>{}</b>",
                signal_marker(result.signal),
                result.signal
            ));
            if let Some(ref rationale) = result.rationale {
                lines.push(format!("<i>{}</i>", escape_html(rationale)));
            }
        }
        parts.push(lines.join("\n"));
    }

    if let Some(ref global) = report.overview.global_crypto {
        let mut lines = vec!["<b>MARKET OVERVIEW</b>".to_string()];
        lines.push(format!(
            "Total Market Cap: {}",
            format_number(global.total_market_cap, "$")
        ));
        if let Some(change) = global.market_cap_change_24h {
            lines.push(format!("24h Change: {}", change_arrow(change)));
        }
        lines.push(format!(
            "24h Volume: {}",
            format_number(global.total_volume_24h, "$")
        ));
        lines.push(format!("BTC Dominance: {:.1}%", global.btc_dominance));
        if let Some(eth) = global.eth_dominance {
            lines.push(format!("ETH Dominance: {:.1}%", eth));
        }
        parts.push(lines.join("\n"));
    }

    if let Some(ref fg) = report.overview.fear_greed {
        parts.push(format!(
            "<b>FEAR &amp; GREED</b>\n{} - {} {}",
            fg.value,
            escape_html(&fg.label),
            fear_greed_band(fg.value)
        ));
    }

    if let Some(ref top) = report.overview.top_assets {
        let mut lines = vec!["<b>TOP COINS</b>".to_string()];
        for quote in top {
            lines.push(format!(
                "{}: {} ({})",
                escape_html(&quote.symbol),
                format_price(quote.price),
                change_arrow(quote.change_percent)
            ));
        }
        parts.push(lines.join("\n"));
    }

    if let Some(ref trending) = report.overview.trending {
        let joined = trending
            .iter()
            .map(|t| escape_html(&t.symbol))
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("<b>TRENDING</b>\n{}", joined));
    }

    if !report.errors.is_empty() {
        let mut lines = vec!["<b>ISSUES</b>".to_string()];
        for error in &report.errors {
            lines.push(format!("- {}", escape_html(error)));
        }
        parts.push(lines.join("\n"));
    }

    parts.join(SECTION_SEPARATOR)
}
