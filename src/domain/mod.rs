//! Domain layer - Core business objects with no external dependencies
//! 
//! This layer contains:
//! - Entities: Booking, booking id, form payload, display zone
//! - Traits: Abstractions for infrastructure (Notifier)

pub mod entities;
pub mod traits;
