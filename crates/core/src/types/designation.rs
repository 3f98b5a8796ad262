//! Attendee designation (job-role label).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Suggested designations offered by the registration form, in display order.
pub const DESIGNATIONS: [&str; 9] = [
    "Software Engineer",
    "Senior Software Engineer",
    "Tech Lead",
    "Engineering Manager",
    "Data Scientist",
    "ML Engineer",
    "Product Manager",
    "Student",
    "Other",
];

/// A job-role label attached to an attendee.
///
/// The form offers [`DESIGNATIONS`], but the API stores free text, so any
/// string is a valid designation.
///
/// ```
/// use workshop_core::Designation;
///
/// assert!(Designation::new("Tech Lead").is_suggested());
/// assert!(!Designation::new("Astronaut").is_suggested());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Designation(String);

impl Designation {
    /// Create a designation from any text.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is one of the suggested [`DESIGNATIONS`].
    #[must_use]
    pub fn is_suggested(&self) -> bool {
        DESIGNATIONS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Designation {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Designation {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Designation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
