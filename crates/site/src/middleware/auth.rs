//! Admin authentication extractor and route guard.
//!
//! The admin "login" is a flag in the visitor's session, set after the API
//! accepts the admin password. It gates the dashboard; it is not a security
//! boundary for the API itself.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{session::AUTHENTICATED, session_keys};

/// Path of the admin login page.
pub const LOGIN_PATH: &str = "/admin/login";

/// The visitor's admin login state, read from the session per request.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(admin: AdminSession) -> impl IntoResponse {
///     if admin.is_authenticated() { "welcome back" } else { "please log in" }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    session: Session,
    authenticated: bool,
}

impl AdminSession {
    /// Whether the admin flag is set for this visitor.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Set the admin flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn login(&mut self) -> Result<(), tower_sessions::session::Error> {
        // New session ID on privilege change.
        self.session.cycle_id().await?;
        self.session
            .insert(session_keys::ADMIN_AUTHENTICATED, AUTHENTICATED)
            .await?;
        self.authenticated = true;
        Ok(())
    }

    /// Clear the admin flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn logout(&mut self) -> Result<(), tower_sessions::session::Error> {
        self.session
            .remove::<String>(session_keys::ADMIN_AUTHENTICATED)
            .await?;
        self.authenticated = false;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer; absent means the router is miswired.
        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            tracing::error!(
                path = %parts.uri.path(),
                "AdminSession extracted on a route without the session layer"
            );
            return Err(AppError::Internal("session layer missing".to_string()));
        };

        let authenticated = session
            .get::<String>(session_keys::ADMIN_AUTHENTICATED)
            .await?
            .is_some_and(|value| value == AUTHENTICATED);

        Ok(Self {
            session,
            authenticated,
        })
    }
}

/// Route guard for the admin area.
///
/// Passes the request through when the admin flag is set. Otherwise
/// redirects to the login page; HTMX requests get an `HX-Redirect` header
/// so the whole page navigates instead of swapping a fragment.
pub async fn require_admin(admin: AdminSession, request: Request, next: Next) -> Response {
    if admin.is_authenticated() {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Admin route requested without login");
    login_redirect(request.headers())
}

/// Redirect to the login page in the form the requester understands.
#[must_use]
pub fn login_redirect(headers: &HeaderMap) -> Response {
    if is_htmx(headers) {
        [("HX-Redirect", LOGIN_PATH)].into_response()
    } else {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

/// Whether the request was issued by HTMX.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers.get("HX-Request").is_some_and(|value| value == "true")
}
