//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Telegram)
//! - LLM: Text generation providers (Gemini)
//! - Web: The booking form HTTP surface

pub mod config;
pub mod adapters;
pub mod llm;
pub mod web;
