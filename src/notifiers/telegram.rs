//! Telegram Bot API notifier with HTML-to-plain-text fallback.

use crate::error::NotifyError;
use crate::formatters::{escape_html, strip_html, SECTION_SEPARATOR};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

pub const MAX_MESSAGE_LENGTH: usize = 4096;
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramNotifier {
    http: reqwest::Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), bot_token, chat_id)
    }

    pub fn with_base_url(base_url: String, bot_token: &str, chat_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    /// Send an HTML message, splitting on section boundaries when it
    /// exceeds Telegram's length limit.
    pub async fn send_message(&self, html_text: &str) -> Result<(), NotifyError> {
        if html_text.len() <= MAX_MESSAGE_LENGTH {
            return self.send_single(html_text).await;
        }

        let parts = split_message(html_text);
        let total = parts.len();
        for (i, part) in parts.iter().enumerate() {
            info!(part = i + 1, total, chars = part.len(), "sending message part");
            self.send_single(part).await?;
        }
        Ok(())
    }

    /// Send an error notification.
    pub async fn send_error(&self, message: &str) -> Result<(), NotifyError> {
        let html = format!(
            "<b>Market Brief Error</b>\n\n<code>{}</code>",
            escape_html(message)
        );
        self.send_message(&html).await
    }

    /// One message with HTML parse mode; falls back to stripped plain text
    /// when Telegram rejects the markup.
    async fn send_single(&self, html_text: &str) -> Result<(), NotifyError> {
        match self.post(html_text, true).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(error = %e, "HTML send failed, retrying as plain text");
                let plain = strip_html(html_text);
                self.post(&plain, false).await.map_err(|e| {
                    error!(error = %e, "plain text send also failed");
                    e
                })
            }
        }
    }

    async fn post(&self, text: &str, html: bool) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let mut body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });
        if html {
            body["parse_mode"] = json!("HTML");
        }

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status().as_u16();
        let api: ApiResponse = response.json().await?;
        if !api.ok {
            return Err(NotifyError::Rejected {
                status,
                description: api.description.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(())
    }
}

/// Split at section boundaries to stay under the message limit; a single
/// oversized section is force-split.
fn split_message(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for section in text.split(SECTION_SEPARATOR) {
        let needed = if current.is_empty() {
            section.len()
        } else {
            current.len() + SECTION_SEPARATOR.len() + section.len()
        };

        if needed <= MAX_MESSAGE_LENGTH {
            if !current.is_empty() {
                current.push_str(SECTION_SEPARATOR);
            }
            current.push_str(section);
            continue;
        }

        if !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        if section.len() > MAX_MESSAGE_LENGTH {
            let chars: Vec<char> = section.chars().collect();
            for chunk in chars.chunks(MAX_MESSAGE_LENGTH) {
                parts.push(chunk.iter().collect());
            }
        } else {
            current = section.to_string();
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
