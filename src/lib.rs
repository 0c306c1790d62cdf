//! Bicycle repair booking form with LLM issue cleanup and Telegram notification

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::services::{BookingReply, BookingService};
pub use infrastructure::config::Config;
