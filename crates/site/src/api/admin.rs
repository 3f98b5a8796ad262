//! Admin password check.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::instrument;

use super::{ApiError, WorkshopClient};

#[derive(Serialize)]
struct LoginBody<'a> {
    password: &'a str,
}

impl WorkshopClient {
    /// Ask the API whether `password` is the admin password.
    ///
    /// `Ok(())` means accepted; a rejected password is an
    /// [`ApiError::Api`] (401, "Invalid password").
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the password is rejected.
    #[instrument(skip_all)]
    pub async fn admin_login(&self, password: &SecretString) -> Result<(), ApiError> {
        let body = LoginBody {
            password: password.expose_secret(),
        };
        self.post("/admin/login", &body).await
    }
}
