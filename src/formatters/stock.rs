//! HTML renderer for the stock market brief.

use crate::formatters::{
    change_arrow, escape_html, format_number, macd_label, rsi_label, signal_marker,
    SECTION_SEPARATOR,
};
use crate::models::report::Report;

pub fn format_stock_report(report: &Report) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<b>Stock Market Daily Brief</b>\n<i>{}</i>\n{}/{} tickers loaded",
        report.timestamp.format("%A, %b %d, %Y - %H:%M UTC"),
        report.succeeded,
        report.attempted,
    ));

    if !report.instruments.is_empty() {
        let mut lines = vec!["<b>YOUR WATCHLIST</b>".to_string()];
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

            lines.push(format!(
                "<b>{}</b> - {}",
                escape_html(&quote.symbol),
                escape_html(&quote.name)
            ));
            lines.push(format!(
                "${:.2} | {}",
                quote.price,
                change_arrow(quote.change_percent)
            ));

            if let Some(ref ind) = result.indicators {
                lines.push(format!("RSI: {}", rsi_label(ind.rsi)));
                lines.push(format!(
                    "MACD: {}",
                    macd_label(ind.macd.as_ref().map(|m| m.histogram))
                ));
                let mut sma_parts = Vec::new();
                if let Some(sma) = ind.sma_short {
                    let relation = if quote.price > sma { "Above" } else { "Below" };
                    sma_parts.push(format!("SMA short: ${:.2} ({})", sma, relation));
                }
                if let Some(sma) = ind.sma_long {
                    sma_parts.push(format!("SMA long: ${:.2}", sma));
                }
                if !sma_parts.is_empty() {
                    lines.push(sma_parts.join(" | "));
                }
                if let Some(ratio) = ind.volume_ratio {
                    lines.push(format!(
                        "Volume: {} ({:.1}x average)",
                        format_number(quote.volume, ""),
                        ratio
                    ));
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

    if let Some(ref benchmarks) = report.overview.benchmarks {
        let mut lines = vec!["<b>MARKET OVERVIEW</b>".to_string()];
        for idx in benchmarks {
            lines.push(format!(
                "{}: ${:.2} ({})",
                escape_html(&idx.name),
                idx.price,
                change_arrow(idx.change_percent)
            ));
        }
        parts.push(lines.join("\n"));
    }

    if let Some(ref sectors) = report.overview.sectors {
        let mut lines = vec!["<b>SECTOR PERFORMANCE</b>".to_string()];
        for (i, sector) in sectors.iter().enumerate() {
            lines.push(format!(
                "{}. {}: {}",
                i + 1,
                escape_html(&sector.name),
                change_arrow(sector.change_percent)
            ));
        }
        parts.push(lines.join("\n"));
    }

    if report.overview.gainers.is_some() || report.overview.losers.is_some() {
        let mut lines = vec!["<b>TOP MOVERS</b>".to_string()];
        if let Some(ref gainers) = report.overview.gainers {
            let joined = gainers
                .iter()
                .map(|m| format!("{} {}", escape_html(&m.symbol), change_arrow(m.change_percent)))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Gainers: {}", joined));
        }
        if let Some(ref losers) = report.overview.losers {
            let joined = losers
                .iter()
                .map(|m| format!("{} {}", escape_html(&m.symbol), change_arrow(m.change_percent)))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Losers: {}", joined));
        }
        parts.push(lines.join("\n"));
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
