//! Booking orchestration: validate, normalize, dispatch, respond

use std::fmt;
use std::sync::Arc;

use crate::application::errors::{BookingError, ConfigError};
use crate::application::messaging::{booking_notification, DispatchOutcome, NotificationDispatcher};
use crate::application::services::IssueNormalizer;
use crate::domain::entities::{Booking, BookingId, BookingRequest, DisplayZone};
use crate::domain::traits::Notifier;
use crate::infrastructure::adapters::TelegramAdapter;
use crate::infrastructure::config::Config;
use crate::infrastructure::llm::{GeminiProvider, LLM};

/// User-facing result of one submission
#[derive(Debug, Clone)]
pub enum BookingReply {
    Rejected(BookingError),
    NotConfigured { contact: String },
    Confirmed { booking: Booking, time: String },
    Fallback { booking: Booking, time: String, contact: String },
}

impl BookingReply {
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            BookingReply::Confirmed { booking, .. } | BookingReply::Fallback { booking, .. } => Some(booking),
            _ => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingReply::Confirmed { .. })
    }
}

impl fmt::Display for BookingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingReply::Rejected(BookingError::MissingField(field)) => {
                write!(f, "⚠️ Please fill in your {} before booking.", field_label(field))
            }
            BookingReply::NotConfigured { contact } => {
                write!(f, "⚠️ Online booking is not configured. Please call or WhatsApp the shop at {}.", contact)
            }
            BookingReply::Confirmed { booking, time } => write!(
                f,
                "✅ Booking sent! The owner will contact you soon.\n\nBooking ID: {}\nTime: {}",
                booking.id, time
            ),
            BookingReply::Fallback { booking, time, contact } => write!(
                f,
                "⚠️ We could not notify the shop automatically. Please call or WhatsApp {} and quote your booking ID.\n\nBooking ID: {}\nTime: {}",
                contact, booking.id, time
            ),
        }
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "problem" => "cycle problem",
        other => other,
    }
}

/// Runs one submission through the booking pipeline
pub struct BookingService {
    shop_name: String,
    id_prefix: String,
    contact: String,
    zone: DisplayZone,
    normalizer: IssueNormalizer,
    dispatcher: NotificationDispatcher,
}

impl BookingService {
    pub fn new(
        shop_name: impl Into<String>,
        id_prefix: impl Into<String>,
        contact: impl Into<String>,
        zone: DisplayZone,
        normalizer: IssueNormalizer,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            shop_name: shop_name.into(),
            id_prefix: id_prefix.into(),
            contact: contact.into(),
            zone,
            normalizer,
            dispatcher,
        }
    }

    /// Wire the Gemini normalizer and Telegram notifier from config
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let zone = config.shop.display_zone()?;

        if BookingId::parse(&format!("{}-0000", config.shop.id_prefix)).is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "id-prefix must be uppercase alphanumeric: {}",
                config.shop.id_prefix
            )));
        }

        let llm: Option<Arc<dyn LLM>> = match GeminiProvider::from_config(&config.llm) {
            Ok(provider) => {
                tracing::info!("Issue normalizer enabled ({})", config.llm.model);
                Some(Arc::new(provider))
            }
            Err(e) => {
                tracing::info!("Issue normalizer disabled: {}", e);
                None
            }
        };
        let normalizer = IssueNormalizer::new(llm, config.llm.prompt.clone())
            .with_generation(Some(config.llm.temperature), config.llm.max_tokens);

        let notifier: Option<Arc<dyn Notifier>> = TelegramAdapter::from_config(&config.telegram)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?
            .map(|adapter| Arc::new(adapter) as Arc<dyn Notifier>);
        if notifier.is_none() {
            tracing::warn!("Telegram not configured: bookings will not be delivered");
        }

        Ok(Self::new(
            config.shop.name.clone(),
            config.shop.id_prefix.clone(),
            config.shop.contact.clone(),
            zone,
            normalizer,
            NotificationDispatcher::new(notifier),
        ))
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    /// validate → normalize → dispatch → respond
    pub async fn submit(&self, request: BookingRequest) -> BookingReply {
        if let Err(e) = request.validate() {
            tracing::info!("Booking rejected: {}", e);
            return BookingReply::Rejected(e);
        }

        if !self.dispatcher.is_configured() {
            return BookingReply::NotConfigured { contact: self.contact.clone() };
        }

        let refined = self.normalizer.normalize(request.problem.trim()).await;
        let booking = Booking::new(BookingId::generate(&self.id_prefix), &request, refined);
        let time = self.zone.format(booking.timestamp);
        tracing::info!("Booking {} received from {}", booking.id, booking.name);

        let message = booking_notification(&self.shop_name, &booking, &self.zone);
        match self.dispatcher.dispatch(&message).await {
            DispatchOutcome::Delivered { .. } => BookingReply::Confirmed { booking, time },
            DispatchOutcome::Failed(_) | DispatchOutcome::NotConfigured => BookingReply::Fallback {
                booking,
                time,
                contact: self.contact.clone(),
            },
        }
    }
}
