//! Domain entities - Core business objects with no external dependencies

pub mod booking;
pub mod notification;

pub use booking::{Booking, BookingId, BookingRequest, DisplayZone};
pub use notification::Notification;
