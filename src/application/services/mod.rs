//! Application services - Business logic orchestration

pub mod booking_service;
pub mod normalizer;

pub use booking_service::{BookingReply, BookingService};
pub use normalizer::IssueNormalizer;
