//! LLM Configuration

use serde::{Deserialize, Serialize};

/// Gemini API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// LLM Configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LLMConfig {
    /// Gemini API key; normalization is skipped without one
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Instruction prepended to the customer's text
    pub prompt: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GEMINI_API_BASE.to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 8,
            temperature: 0.2,
            max_tokens: Some(256),
            prompt: "You are helping a bicycle repair shop. Rewrite the customer's description \
of their cycle problem as one or two short, clear sentences a mechanic can act on. \
Keep every concrete detail, do not invent anything, and reply with the rewritten text only."
                .to_string(),
        }
    }
}

impl LLMConfig {
    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Some(key) = non_blank_env("GEMINI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(model) = non_blank_env("GEMINI_MODEL") {
            self.model = model;
        }
    }

    /// Get the API key, treating blank values as missing
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

pub(crate) fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
