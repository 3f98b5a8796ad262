//! Attendee operations.

use serde::Deserialize;
use tracing::instrument;
use workshop_core::{Attendee, NewAttendee};

use super::{ApiError, WorkshopClient};

/// Body of `GET /attendees/count`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

impl WorkshopClient {
    /// List every registered attendee.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_attendees(&self) -> Result<Vec<Attendee>, ApiError> {
        self.get_list("/attendees", "attendees").await
    }

    /// Register a new attendee.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the API rejects the body.
    #[instrument(skip(self, attendee), fields(designation = %attendee.designation))]
    pub async fn register_attendee(&self, attendee: &NewAttendee) -> Result<(), ApiError> {
        self.post("/attendees", attendee).await?;
        tracing::info!("Attendee registered");
        Ok(())
    }

    /// Number of registered attendees.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the body has no `count`.
    #[instrument(skip(self))]
    pub async fn attendee_count(&self) -> Result<u64, ApiError> {
        let response: CountResponse = self.get("/attendees/count").await?;
        Ok(response.count)
    }
}
