//! Telegram adapter

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::errors::BotError;
use crate::domain::entities::Notification;
use crate::domain::traits::Notifier;
use crate::infrastructure::config::{TelegramConfig, TELEGRAM_API_BASE};

/// Telegram bot adapter, bound to the shop owner's chat
pub struct TelegramAdapter {
    token: String,
    chat_id: String,
    api_base: String,
    client: Client,
}

impl TelegramAdapter {
    pub fn new(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::Config(e.to_string()))?;

        Ok(Self {
            token: token.into(),
            chat_id: chat_id.into(),
            api_base: TELEGRAM_API_BASE.to_string(),
            client,
        })
    }

    /// Build from config; `None` when token or chat id is missing
    pub fn from_config(config: &TelegramConfig) -> Result<Option<Self>, BotError> {
        let Some((token, chat_id)) = config.credentials() else {
            return Ok(None);
        };
        let adapter = Self::new(token, chat_id, Duration::from_secs(config.timeout_secs))?
            .with_api_base(&config.api_base);
        Ok(Some(adapter))
    }

    /// Point at a different API host (local bot API server, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API URL for a method; the token is part of the path
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Send the Markdown rendering, fall back to the plain one if Telegram rejects the entities
    pub async fn send_message_api(&self, note: &Notification) -> Result<String, BotError> {
        match self.send_message_with_format(&note.markdown, Some("Markdown")).await {
            Ok(result) => Ok(result),
            Err(BotError::Rejected(e)) => {
                tracing::warn!("Markdown rejected, using plain text: {}", e);
                self.send_message_with_format(&note.plain, None).await
            }
            Err(e) => Err(e),
        }
    }

    /// Send a message with specific parse mode
    pub async fn send_message_with_format(&self, text: &str, parse_mode: Option<&str>) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: &'a str,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            parse_mode: Option<&'a str>,
        }

        #[derive(Deserialize)]
        struct Response {
            ok: bool,
            result: Option<MessageResult>,
            description: Option<String>,
        }

        #[derive(Deserialize)]
        struct MessageResult {
            message_id: i64,
        }

        let url = self.api_url("sendMessage");
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode,
        };

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let error = response.text().await.unwrap_or_default();
            return Err(BotError::Rejected(error));
        }
        if !status.is_success() {
            return Err(BotError::Network(format!("Telegram API error: {}", status)));
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.without_url().to_string()))?;

        match (data.ok, data.result) {
            (true, Some(result)) => Ok(result.message_id.to_string()),
            _ => Err(BotError::Rejected(data.description.unwrap_or_else(|| "ok: false".to_string()))),
        }
    }
}

#[async_trait]
impl Notifier for TelegramAdapter {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send_message(&self, note: &Notification) -> Result<String, BotError> {
        tracing::debug!("Sending to {}: {}", self.chat_id, note.plain);

        match self.send_message_api(note).await {
            Ok(msg_id) => Ok(msg_id),
            Err(e) => {
                tracing::error!("Failed to send message: {}", e);
                Err(e)
            }
        }
    }
}
