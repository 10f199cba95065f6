//! Reservation Model
//!
//! Field values are kept as the strings the guest typed; nothing here is
//! persisted. The lifecycle driving these types lives in the site crate.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;
/// Party size preselected on a fresh form
pub const DEFAULT_GUESTS: &str = "2";

/// Bookable times (24h), lunch then dinner service
pub const TIME_SLOTS: [&str; 14] = [
    "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "14:00", "18:00", "18:30", "19:00",
    "19:30", "20:00", "20:30", "21:00",
];

/// Reservation request as entered on the contact page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// `HH:MM`, one of [`TIME_SLOTS`]
    #[serde(default)]
    pub time: String,
    #[serde(default = "default_guests")]
    pub guests: String,
    #[serde(default)]
    pub message: String,
}

fn default_guests() -> String {
    DEFAULT_GUESTS.to_string()
}

impl Default for ReservationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: default_guests(),
            message: String::new(),
        }
    }
}

impl ReservationRequest {
    pub fn get(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::Name => &self.name,
            ReservationField::Email => &self.email,
            ReservationField::Phone => &self.phone,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
            ReservationField::Guests => &self.guests,
            ReservationField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ReservationField, value: impl Into<String>) {
        let slot = match field {
            ReservationField::Name => &mut self.name,
            ReservationField::Email => &mut self.email,
            ReservationField::Phone => &mut self.phone,
            ReservationField::Date => &mut self.date,
            ReservationField::Time => &mut self.time,
            ReservationField::Guests => &mut self.guests,
            ReservationField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that are still blank, in form order
    pub fn missing_required(&self) -> Vec<ReservationField> {
        ReservationField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Party size, if it is one of the selectable values
    pub fn guest_count(&self) -> Option<u8> {
        self.guests
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (MIN_GUESTS..=MAX_GUESTS).contains(n))
    }

    /// True when the form holds nothing but its defaults
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

/// Reservation form field names (the HTML `name` attributes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
}

impl ReservationField {
    pub const ALL: [ReservationField; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Date,
        Self::Time,
        Self::Guests,
        Self::Message,
    ];

    /// Fields the form marks `required`
    pub const REQUIRED: [ReservationField; 4] = [Self::Name, Self::Email, Self::Date, Self::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reservation field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for ReservationField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Partial update payload: every present field is written as-is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<String>,
    pub message: Option<String>,
}

impl ReservationUpdate {
    /// Present fields as (field, value) edits, in form order
    pub fn into_edits(self) -> Vec<(ReservationField, String)> {
        [
            (ReservationField::Name, self.name),
            (ReservationField::Email, self.email),
            (ReservationField::Phone, self.phone),
            (ReservationField::Date, self.date),
            (ReservationField::Time, self.time),
            (ReservationField::Guests, self.guests),
            (ReservationField::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Submission lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// While submitting the submit control is disabled
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Label of the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Submitting..."
        } else {
            "Submit Reservation"
        }
    }

    /// Banner shown above the form, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(
                "Thank you! Your reservation request has been submitted. We'll contact you shortly to confirm.",
            ),
            Self::Error => Some(
                "Sorry, there was an error submitting your reservation. Please try again or call us directly.",
            ),
            Self::Idle | Self::Submitting => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Entry of the party-size selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestOption {
    pub value: u8,
    pub label: String,
}

/// Party sizes 1 through 8 with "1 Guest" / "N Guests" labels
pub fn guest_options() -> Vec<GuestOption> {
    (MIN_GUESTS..=MAX_GUESTS)
        .map(|n| GuestOption {
            value: n,
            label: if n == 1 {
                format!("{n} Guest")
            } else {
                format!("{n} Guests")
            },
        })
        .collect()
}

/// Entry of the time selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// `HH:MM` (24h)
    pub value: String,
    /// `h:MM AM/PM`
    pub label: String,
}

/// The bookable times with 12-hour labels
pub fn time_slots() -> Vec<TimeSlot> {
    TIME_SLOTS
        .iter()
        .map(|value| TimeSlot {
            value: value.to_string(),
            label: NaiveTime::parse_from_str(value, "%H:%M")
                .map(|t| t.format("%-I:%M %p").to_string())
                .unwrap_or_else(|_| value.to_string()),
        })
        .collect()
}

/// Everything a client needs to render the reservation form controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationOptions {
    pub guests: Vec<GuestOption>,
    pub times: Vec<TimeSlot>,
    /// Earliest selectable date (`YYYY-MM-DD`, today)
    pub min_date: String,
}

/// Externally visible state of one reservation form instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationFormSnapshot {
    pub id: Uuid,
    pub status: SubmissionStatus,
    pub fields: ReservationRequest,
    /// Mirrors the disabled state of the submit control
    pub busy: bool,
    pub submit_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}
