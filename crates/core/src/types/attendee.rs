//! Attendee records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::designation::Designation;
use super::id::AttendeeId;
use super::serde_helpers::{optional_timestamp, text_or_empty};

/// A registered attendee as returned by the API.
///
/// Attendees are created by registration and never mutated or deleted
/// through this interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// API-assigned document ID.
    pub id: AttendeeId,
    /// Full name.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    /// Email address as entered (browser-validated only).
    #[serde(default, deserialize_with = "text_or_empty")]
    pub email: String,
    /// Job-role label.
    #[serde(default, deserialize_with = "designation_or_empty")]
    pub designation: Designation,
    /// Registration timestamp, set by the API.
    #[serde(
        default,
        deserialize_with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Attendee {
    /// First character of the name, for avatar badges.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }
}

fn designation_or_empty<'de, D>(deserializer: D) -> Result<Designation, D::Error>
where
    D: serde::Deserializer<'de>,
{
    text_or_empty(deserializer).map(Designation::from)
}

/// Registration request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendee {
    pub name: String,
    pub email: String,
    pub designation: Designation,
}
