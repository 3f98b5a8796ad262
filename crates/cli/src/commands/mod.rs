//! Subcommand implementations.

pub mod attendees;
pub mod count;
pub mod register;
pub mod schedule;

use thiserror::Error;
use workshop_site::api::{ApiError, WorkshopClient};
use workshop_site::config::{ApiConfig, ConfigError};
use workshop_site::registration::RegistrationError;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid `WORKSHOP_API_URL`.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// API request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A collection could not be loaded.
    #[error("Could not load {resource}: {reason}")]
    Unavailable {
        resource: &'static str,
        reason: String,
    },

    /// Registration rejected.
    #[error("{}", .0.user_message())]
    Registration(#[from] RegistrationError),
}

/// Build a client for `WORKSHOP_API_URL`.
///
/// # Errors
///
/// Returns error if the URL is invalid or the HTTP client cannot be built.
pub fn client() -> Result<WorkshopClient, CliError> {
    let config = ApiConfig::from_env()?;
    tracing::debug!(api = %config.base_url, "Using workshop API");
    Ok(WorkshopClient::new(&config)?)
}
