//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::domain::entities::DisplayZone;
use crate::infrastructure::llm::config::non_blank_env;
use crate::infrastructure::llm::LLMConfig;

/// Telegram API base URL
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub shop: ShopConfig,
    pub server: ServerConfig,
    pub telegram: TelegramConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ShopConfig {
    pub name: String,
    /// Booking id prefix, e.g. `RCM` for `RCM-0427`
    pub id_prefix: String,
    /// Phone/WhatsApp number shown when dispatch fails
    pub contact: String,
    /// Display timezone, minutes east of UTC
    pub utc_offset_minutes: i32,
    pub timezone_label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TelegramConfig {
    pub token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "Raja Cycle Mart".to_string(),
            id_prefix: "RCM".to_string(),
            contact: "+91 98765 43210".to_string(),
            utc_offset_minutes: 330,
            timezone_label: "IST".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            chat_id: None,
            api_base: TELEGRAM_API_BASE.to_string(),
            timeout_secs: 5,
        }
    }
}

impl TelegramConfig {
    /// Token and chat id, both present and non-blank
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let token = self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let chat_id = self.chat_id.as_deref().map(str::trim).filter(|c| !c.is_empty())?;
        Some((token, chat_id))
    }
}

impl ShopConfig {
    pub fn display_zone(&self) -> Result<DisplayZone, ConfigError> {
        DisplayZone::new(self.utc_offset_minutes, self.timezone_label.clone()).ok_or_else(|| {
            ConfigError::InvalidValue(format!(
                "utc-offset-minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables; blank values are ignored
    pub fn apply_env(&mut self) {
        if let Some(token) = non_blank_env("TELEGRAM_BOT_TOKEN") {
            self.telegram.token = Some(token);
        }
        if let Some(chat_id) = non_blank_env("CHAT_ID") {
            self.telegram.chat_id = Some(chat_id);
        }
        if let Some(contact) = non_blank_env("SHOP_CONTACT") {
            self.shop.contact = contact;
        }
        if let Some(host) = non_blank_env("HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_blank_env("PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }

        self.llm.apply_env();
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("bind address: {}", e)))
    }
}
