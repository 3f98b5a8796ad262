//! Session CRUD operations.

use tracing::instrument;
use workshop_core::{Session, SessionId, SessionInput};

use super::{ApiError, WorkshopClient, path_id};

impl WorkshopClient {
    /// List all sessions.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.get_list("/sessions", "sessions").await
    }

    /// Create a session.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn create_session(&self, input: &SessionInput) -> Result<(), ApiError> {
        self.post("/sessions", input).await
    }

    /// Replace the editable fields of a session.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(session_id = %id))]
    pub async fn update_session(&self, id: &SessionId, input: &SessionInput) -> Result<(), ApiError> {
        self.put(&format!("/sessions/{}", path_id(id)), input).await
    }

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(session_id = %id))]
    pub async fn delete_session(&self, id: &SessionId) -> Result<(), ApiError> {
        self.delete(&format!("/sessions/{}", path_id(id))).await
    }
}
