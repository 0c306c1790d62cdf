//! Domain traits - Abstractions for infrastructure implementations

pub mod notifier;

pub use notifier::Notifier;
