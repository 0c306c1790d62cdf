//! LLM integration - Text generation for issue normalization

pub mod traits;
pub mod config;
pub mod providers;

#[cfg(test)]
mod tests;

pub use traits::{LLM, LLMResponse, LLMError, LLMResult, LLMUsage};
pub use config::LLMConfig;
pub use providers::GeminiProvider;
