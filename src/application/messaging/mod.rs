//! Outbound messaging - Notification formatting and delivery

pub mod dispatcher;
pub mod format;

pub use dispatcher::{DispatchOutcome, NotificationDispatcher};
pub use format::{booking_notification, escape_markdown};
