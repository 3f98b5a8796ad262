//! Speaker records.

use serde::{Deserialize, Serialize};

use super::id::SpeakerId;
use super::serde_helpers::optional_text;

/// A workshop speaker as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// API-assigned document ID.
    pub id: SpeakerId,
    /// Display name; absent or blank renders a placeholder.
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    /// Biography text.
    #[serde(default, deserialize_with = "optional_text")]
    pub bio: Option<String>,
}

impl Speaker {
    /// The editable fields of this speaker, for pre-filling the edit form.
    #[must_use]
    pub fn to_input(&self) -> SpeakerInput {
        SpeakerInput {
            name: self.name.clone().unwrap_or_default(),
            bio: self.bio.clone().unwrap_or_default(),
        }
    }
}

/// Create/update request body for a speaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerInput {
    pub name: String,
    pub bio: String,
}
