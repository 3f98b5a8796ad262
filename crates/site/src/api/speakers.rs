//! Speaker CRUD operations.

use tracing::instrument;
use workshop_core::{Speaker, SpeakerId, SpeakerInput};

use super::{ApiError, WorkshopClient, path_id};

impl WorkshopClient {
    /// List all speakers.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_speakers(&self) -> Result<Vec<Speaker>, ApiError> {
        self.get_list("/speakers", "speakers").await
    }

    /// Create a speaker.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn create_speaker(&self, input: &SpeakerInput) -> Result<(), ApiError> {
        self.post("/speakers", input).await
    }

    /// Replace the editable fields of a speaker.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(speaker_id = %id))]
    pub async fn update_speaker(&self, id: &SpeakerId, input: &SpeakerInput) -> Result<(), ApiError> {
        self.put(&format!("/speakers/{}", path_id(id)), input).await
    }

    /// Delete a speaker. Sessions referencing it are left as they are.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(speaker_id = %id))]
    pub async fn delete_speaker(&self, id: &SpeakerId) -> Result<(), ApiError> {
        self.delete(&format!("/speakers/{}", path_id(id))).await
    }
}
