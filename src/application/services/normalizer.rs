use std::sync::Arc;

use crate::infrastructure::llm::{LLMError, LLMResult, LLM};

/// Rewrites customer issue text into something a mechanic can act on
#[derive(Clone)]
pub struct IssueNormalizer {
    llm: Option<Arc<dyn LLM>>,
    prompt: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl IssueNormalizer {
    pub fn new(llm: Option<Arc<dyn LLM>>, prompt: impl Into<String>) -> Self {
        Self {
            llm,
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Normalizer that always returns its input
    pub fn disabled() -> Self {
        Self::new(None, String::new())
    }

    pub fn with_generation(mut self, temperature: Option<f32>, max_tokens: Option<u32>) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.llm.is_some()
    }

    fn build_prompt(&self, raw: &str) -> String {
        format!("{}\n\nCustomer description:\n{}", self.prompt, raw)
    }

    /// One generation attempt, with the failure left visible
    pub async fn try_refine(&self, raw: &str) -> LLMResult<String> {
        let llm = self.llm.as_ref().ok_or(LLMError::MissingApiKey)?;
        let response = llm
            .generate(&self.build_prompt(raw), self.temperature, self.max_tokens)
            .await?;
        Ok(response.content.trim().to_string())
    }

    /// Refined text, or `raw` unchanged on any failure
    pub async fn normalize(&self, raw: &str) -> String {
        if !self.is_enabled() {
            return raw.to_string();
        }

        match self.try_refine(raw).await {
            Ok(refined) if !refined.is_empty() => refined,
            Ok(_) => {
                tracing::warn!("Normalizer returned blank text, keeping original");
                raw.to_string()
            }
            Err(e) => {
                tracing::warn!("Normalizer failed, keeping original: {}", e);
                raw.to_string()
            }
        }
    }
}
