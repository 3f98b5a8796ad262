//! Attendee registration: form validation, submission and count polling.

mod poller;

pub use poller::{CountPoller, CountSource};

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use workshop_core::{Designation, NewAttendee};

use crate::api::{ApiError, WorkshopClient};

/// How often the attendee count is refreshed.
pub const COUNT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long the success indicator stays visible.
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Shown when any field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Shown when the API rejects a registration without saying why.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Registration failures.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// At least one field is empty; nothing was sent.
    #[error("{MISSING_FIELDS_MESSAGE}")]
    MissingFields,

    /// The API call failed.
    #[error("Registration request failed: {0}")]
    Api(#[from] ApiError),
}

impl RegistrationError {
    /// Message to show next to the form.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingFields => MISSING_FIELDS_MESSAGE,
            Self::Api(e) => e.server_message().unwrap_or(REGISTRATION_FAILED_MESSAGE),
        }
    }
}

/// Registration form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub designation: String,
}

impl RegistrationForm {
    /// Check that every field has content and build the request body.
    ///
    /// Whitespace-only fields count as empty. Values are sent trimmed.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::MissingFields` if any field is empty.
    pub fn validate(&self) -> Result<NewAttendee, RegistrationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let designation = self.designation.trim();

        if name.is_empty() || email.is_empty() || designation.is_empty() {
            return Err(RegistrationError::MissingFields);
        }

        Ok(NewAttendee {
            name: name.to_owned(),
            email: email.to_owned(),
            designation: Designation::new(designation),
        })
    }
}

/// Validate and submit a registration.
///
/// Validation failures never reach the network.
///
/// # Errors
///
/// Returns `RegistrationError` if validation or the API call fails.
pub async fn register(
    client: &WorkshopClient,
    form: &RegistrationForm,
) -> Result<NewAttendee, RegistrationError> {
    let attendee = form.validate()?;
    client.register_attendee(&attendee).await?;
    Ok(attendee)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, designation: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_owned(),
            email: email.to_owned(),
            designation: designation.to_owned(),
        }
    }

    #[test]
    fn test_any_empty_field_is_rejected() {
        for form in [
            form("", "a@example.com", "Student"),
            form("Asha", "", "Student"),
            form("Asha", "a@example.com", ""),
            form("   ", "a@example.com", "Student"),
        ] {
            let err = form.validate().unwrap_err();
            assert!(matches!(err, RegistrationError::MissingFields));
            assert_eq!(err.user_message(), "Please fill in all fields");
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let attendee = form(" Test User ", "test@example.com ", "Software Engineer")
            .validate()
            .unwrap();
        assert_eq!(attendee.name, "Test User");
        assert_eq!(attendee.email, "test@example.com");
        assert_eq!(attendee.designation.as_str(), "Software Engineer");
    }

    #[test]
    fn test_server_message_is_surfaced() {
        let err = RegistrationError::Api(ApiError::Api {
            status: 400,
            message: Some("Invalid request body".to_owned()),
        });
        assert_eq!(err.user_message(), "Invalid request body");
    }

    #[test]
    fn test_fallback_message_without_server_message() {
        let err = RegistrationError::Api(ApiError::Parse("bad json".to_owned()));
        assert_eq!(err.user_message(), REGISTRATION_FAILED_MESSAGE);
    }

    #[test]
    fn test_timing_constants() {
        assert_eq!(COUNT_POLL_INTERVAL, Duration::from_secs(5));
        assert_eq!(SUCCESS_DISMISS_AFTER, Duration::from_secs(3));
    }
}
