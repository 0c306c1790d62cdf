//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Booking orchestration and issue normalization
//! - Messaging: Notification formatting and dispatch
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
pub mod messaging;
