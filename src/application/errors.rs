//! Application layer errors

use thiserror::Error;

/// Messaging errors raised by notifier adapters
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Rejected by messaging API: {0}")]
    Rejected(String),
}

/// Booking form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
