use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::application::errors::BookingError;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9]*-\d{4}$").expect("valid booking id pattern"))
}

/// Booking identifier, `PREFIX-NNNN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingId(String);

impl BookingId {
    /// Generate a fresh id with a random 4-digit suffix
    pub fn generate(prefix: &str) -> Self {
        let n: u16 = rand::thread_rng().gen_range(0..10_000);
        Self(format!("{}-{:04}", prefix, n))
    }

    /// Parse an id, accepting only the prefix-plus-4-digit shape
    pub fn parse(s: &str) -> Option<Self> {
        id_pattern().is_match(s).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed display timezone for booking timestamps
#[derive(Debug, Clone)]
pub struct DisplayZone {
    offset: FixedOffset,
    label: String,
}

impl DisplayZone {
    /// Build from an offset east of UTC in minutes
    pub fn new(offset_minutes: i32, label: impl Into<String>) -> Option<Self> {
        Some(Self {
            offset: FixedOffset::east_opt(offset_minutes.checked_mul(60)?)?,
            label: label.into(),
        })
    }

    /// Render an instant in this zone, e.g. `05 Mar 2024, 02:30 PM IST`
    pub fn format(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.offset);
        format!("{} {}", local.format("%d %b %Y, %I:%M %p"), self.label)
    }
}

/// Raw booking form payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub problem: String,
}

impl BookingRequest {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            problem: problem.into(),
        }
    }

    /// Reject blank name or problem text
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField("name"));
        }
        if self.problem.trim().is_empty() {
            return Err(BookingError::MissingField("problem"));
        }
        Ok(())
    }
}

/// One customer service request, alive for a single submission
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub phone: Option<String>,
    pub problem: String,
    pub refined_problem: String,
    pub timestamp: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, request: &BookingRequest, refined_problem: impl Into<String>) -> Self {
        let phone = request.phone.trim();
        Self {
            id,
            name: request.name.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            problem: request.problem.trim().to_string(),
            refined_problem: refined_problem.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether normalization changed the customer's wording
    pub fn was_refined(&self) -> bool {
        self.refined_problem != self.problem
    }
}
