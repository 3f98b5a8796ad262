//! Workshop REST API client.
//!
//! Typed async access to the four resource groups the backend exposes.
//!
//! # Resources
//!
//! - **Attendees**: list, register, count
//! - **Speakers**: list, create, update, delete
//! - **Sessions**: list, create, update, delete
//! - **Admin**: password login
//!
//! # API Reference
//!
//! - Base URL: `WORKSHOP_API_URL` (default `http://127.0.0.1:8080/api`)
//! - Bodies are JSON; errors are `{"error": "<message>"}`
//! - Empty collections may be returned as `null`
//!
//! There is no retry, no caching and no auth header: every call is one
//! request and every failure is terminal for that call.

mod admin;
mod attendees;
mod decode;
mod sessions;
mod speakers;

pub use attendees::CountResponse;

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

/// Errors that can occur when interacting with the workshop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// The body's `error` field, when the API sent one.
        message: Option<String>,
    },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The message the API put in its error body, if any.
    ///
    /// Safe to show to visitors: it is what the backend chose to say.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// HTTP status returned by the API, if the request got that far.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body sent by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Workshop API client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct WorkshopClient {
    inner: Arc<WorkshopClientInner>,
}

struct WorkshopClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl WorkshopClient {
    /// Create a new workshop API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(WorkshopClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Execute a GET request and decode the body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        let body = Self::handle_response(response).await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")))
    }

    /// Execute a GET request for a collection, decoding leniently.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> Result<Vec<T>, ApiError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        let body = Self::handle_response(response).await?;
        Ok(decode::lenient_list(body, resource))
    }

    /// Execute a POST request, discarding the response body.
    async fn post<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self.inner.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await.map(drop)
    }

    /// Execute a PUT request, discarding the response body.
    async fn put<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self.inner.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await.map(drop)
    }

    /// Execute a DELETE request.
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.inner.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await.map(drop)
    }

    /// Handle API response, returning the JSON body (`null` when empty).
    async fn handle_response(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::parse_error(response).await);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(format!("Invalid JSON body: {e}")))
    }

    /// Parse error response from the workshop API.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty());

        tracing::warn!(status, message = ?message, "Workshop API returned an error");

        ApiError::Api { status, message }
    }
}

/// Percent-encode a record ID for use as a path segment.
fn path_id(id: &impl AsRef<str>) -> String {
    urlencoding::encode(id.as_ref()).into_owned()
}

impl std::fmt::Debug for WorkshopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkshopClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
