//! Form bodies for the speaker and session panels.
//!
//! Both panels share one protocol: the modal form carries a hidden `id`
//! when editing. A non-blank `id` dispatches an update, otherwise a create.
//! Deletes require an explicit `confirm=true`.

use serde::Deserialize;
use workshop_core::{SessionId, SessionInput, SpeakerId, SpeakerInput};

use crate::api::{ApiError, WorkshopClient};

pub const SAVE_SPEAKER_FAILED: &str = "Error saving speaker. Please try again.";
pub const DELETE_SPEAKER_FAILED: &str = "Error deleting speaker. Please try again.";
pub const SAVE_SESSION_FAILED: &str = "Error saving session. Please try again.";
pub const DELETE_SESSION_FAILED: &str = "Error deleting session. Please try again.";

pub const CONFIRM_DELETE_SPEAKER: &str = "Are you sure you want to delete this speaker?";
pub const CONFIRM_DELETE_SESSION: &str = "Are you sure you want to delete this session?";

/// What a save dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Speaker modal form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeakerForm {
    /// Present when editing an existing speaker.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

impl SpeakerForm {
    /// The speaker being edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<SpeakerId> {
        non_blank(&self.id).map(SpeakerId::new)
    }

    /// Request body for create/update.
    #[must_use]
    pub fn input(&self) -> SpeakerInput {
        SpeakerInput {
            name: self.name.clone(),
            bio: self.bio.clone(),
        }
    }

    /// Update when editing, create otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn save(&self, client: &WorkshopClient) -> Result<SaveOutcome, ApiError> {
        let input = self.input();
        match self.editing_id() {
            Some(id) => {
                client.update_speaker(&id, &input).await?;
                Ok(SaveOutcome::Updated)
            }
            None => {
                client.create_speaker(&input).await?;
                Ok(SaveOutcome::Created)
            }
        }
    }
}

/// Session modal form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionForm {
    /// Present when editing an existing session.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// Blank when "Select a speaker" is chosen.
    #[serde(default)]
    pub speaker_id: String,
}

impl SessionForm {
    /// The session being edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<SessionId> {
        non_blank(&self.id).map(SessionId::new)
    }

    /// Request body for create/update.
    #[must_use]
    pub fn input(&self) -> SessionInput {
        SessionInput {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            speaker_id: non_blank(&self.speaker_id).map(SpeakerId::new),
        }
    }

    /// Update when editing, create otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn save(&self, client: &WorkshopClient) -> Result<SaveOutcome, ApiError> {
        let input = self.input();
        match self.editing_id() {
            Some(id) => {
                client.update_session(&id, &input).await?;
                Ok(SaveOutcome::Updated)
            }
            None => {
                client.create_session(&input).await?;
                Ok(SaveOutcome::Created)
            }
        }
    }
}

/// Delete confirmation form. Anything but `confirm=true` is a decline.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: bool,
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
