//! Telegram Bot API client used to push the digest notification.

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::DigestError;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Timeout applied to every `sendMessage` call.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(20);

pub struct TelegramNotifier {
    http: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// # Errors
    ///
    /// Returns a configuration error when the HTTP client cannot be built.
    pub fn new(bot_token: String, chat_id: String) -> Result<Self, DigestError> {
        let http = Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .map_err(|e| {
                DigestError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_base: TELEGRAM_API_BASE.to_string(),
            bot_token,
            chat_id,
        })
    }

    /// # Errors
    ///
    /// Returns a configuration error when the bot token or target chat id is missing.
    pub fn from_config(config: &AppConfig) -> Result<Self, DigestError> {
        let (token, chat_id) = config.require_notification()?;
        Self::new(token.to_string(), chat_id.to_string())
    }

    /// Point the client at a different Bot API host (self-hosted server, tests).
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base, self.bot_token)
    }

    /// # Errors
    ///
    /// Returns [`DigestError::NotificationDelivery`] on transport failure or a non-2xx response.
    pub async fn send_message(&self, text: &str) -> Result<(), DigestError> {
        let response = self
            .http
            .post(self.api_url("sendMessage"))
            .json(&build_send_message_payload(&self.chat_id, text))
            .send()
            .await
            // reqwest errors carry the URL, which embeds the bot token.
            .map_err(|e| DigestError::NotificationDelivery(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("sendMessage failed: status={} body={}", status, body_text);
            return Err(DigestError::NotificationDelivery(format!(
                "status {}: {}",
                status, body_text
            )));
        }

        info!("Posted digest to chat {}", self.chat_id);
        Ok(())
    }
}

#[must_use]
pub fn build_send_message_payload(chat_id: &str, text: &str) -> Value {
    json!({
        "chat_id": chat_id,
        "text": text,
        "parse_mode": "HTML",
        "disable_web_page_preview": true
    })
}
