//! Gemini Provider - Google generateContent API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::llm::config::GEMINI_API_BASE;
use crate::infrastructure::llm::{LLMConfig, LLMError, LLMResponse, LLMResult, LLMUsage, LLM};

/// Gemini provider
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
}

impl GeminiProvider {
    pub fn new(
        api_key: impl Into<String>,
        model: Option<&str>,
        timeout: Duration,
    ) -> LLMResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::NetworkError(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE.to_string(),
            client,
            model: model.unwrap_or("gemini-1.5-flash").to_string(),
        })
    }

    /// Build from config; `MissingApiKey` when no key is set
    pub fn from_config(config: &LLMConfig) -> LLMResult<Self> {
        let api_key = config.api_key().ok_or(LLMError::MissingApiKey)?;
        Ok(Self::new(api_key, Some(config.model.as_str()), Duration::from_secs(config.timeout_secs))?
            .with_base_url(&config.base_url))
    }

    /// Point at a different host (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint URL; the key travels as a query parameter
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

/// API request structure
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// API response structure
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

#[async_trait]
impl LLM for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        prompt: &str,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LLMResult<LLMResponse> {
        let generation_config = (temperature.is_some() || max_tokens.is_some()).then(|| GenerationConfig {
            temperature,
            max_output_tokens: max_tokens,
        });

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            generation_config,
        };

        let response = self.client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| LLMError::NetworkError(e.without_url().to_string()))?;

        if response.status() == 429 {
            return Err(LLMError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::ApiError(format!("status: {}, body: {}", status, body)));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.without_url().to_string()))?;

        let candidate = body.candidates
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::ParseError("No candidates in response".to_string()))?;

        let text = candidate.content
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| LLMError::ParseError("Candidate has no text part".to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(LLMError::EmptyResponse);
        }

        let usage = body.usage_metadata.map(|u| LLMUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(LLMResponse {
            content: text.to_string(),
            model: self.model.clone(),
            usage,
            finish_reason: candidate.finish_reason,
        })
    }
}
