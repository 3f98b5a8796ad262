//! Workshop session records.

use serde::{Deserialize, Deserializer, Serialize};

use super::id::{SessionId, SpeakerId};
use super::serde_helpers::optional_text;

/// A scheduled workshop session as returned by the API.
///
/// `speaker_id` is a weak reference: the speaker it names may be missing
/// from the loaded speaker collection, which consumers treat as "no speaker".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// API-assigned document ID.
    pub id: SessionId,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    /// Free-form date as entered in the admin form (e.g. `2025-12-06`).
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
    /// Free-form time as entered in the admin form (e.g. `10:30`).
    #[serde(default, deserialize_with = "optional_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "optional_speaker_id")]
    pub speaker_id: Option<SpeakerId>,
}

impl Session {
    /// The editable fields of this session, for pre-filling the edit form.
    #[must_use]
    pub fn to_input(&self) -> SessionInput {
        SessionInput {
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            date: self.date.clone().unwrap_or_default(),
            time: self.time.clone().unwrap_or_default(),
            speaker_id: self.speaker_id.clone(),
        }
    }
}

/// Empty strings and `null` both mean "no speaker".
fn optional_speaker_id<'de, D>(deserializer: D) -> Result<Option<SpeakerId>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(|id| id.map(SpeakerId::from))
}

/// Create/update request body for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<SpeakerId>,
}
