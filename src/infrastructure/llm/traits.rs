//! LLM traits - Text generation interface

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// LLM response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// Generated text
    pub content: String,
    /// Model used
    pub model: String,
    /// Number of tokens used (if available)
    pub usage: Option<LLMUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMUsage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

/// LLM errors
#[derive(Debug)]
pub enum LLMError {
    /// API key missing
    MissingApiKey,
    /// API error from provider
    ApiError(String),
    /// Network error, including timeouts
    NetworkError(String),
    /// Rate limited
    RateLimited,
    /// Response body did not have the expected shape
    ParseError(String),
    /// Response parsed but carried no usable text
    EmptyResponse,
}

impl std::fmt::Display for LLMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMError::MissingApiKey => write!(f, "Missing API key"),
            LLMError::ApiError(msg) => write!(f, "API error: {}", msg),
            LLMError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LLMError::RateLimited => write!(f, "Rate limited"),
            LLMError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            LLMError::EmptyResponse => write!(f, "Empty response"),
        }
    }
}

impl std::error::Error for LLMError {}

/// Result type for LLM operations
pub type LLMResult<T> = Result<T, LLMError>;

/// LLM Provider trait
#[async_trait]
pub trait LLM: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Single-turn text generation
    async fn generate(
        &self,
        prompt: &str,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LLMResult<LLMResponse>;
}
