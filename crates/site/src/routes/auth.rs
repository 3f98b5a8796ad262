//! Admin login and logout handlers.
//!
//! The password goes to the API; only its verdict is kept, as a flag in
//! the visitor's session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use crate::api::ApiError;
use crate::error::{AppError, add_breadcrumb};
use crate::middleware::AdminSession;
use crate::middleware::auth::LOGIN_PATH;
use crate::state::AppState;

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/admin";

/// Shown when the API rejects the password without a message.
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";

/// Shown when the API could not be reached.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    /// Inline error; empty when there is none.
    pub error: String,
}

/// Login form body.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    password: String,
}

/// Render the login page, or go straight to the dashboard when the
/// visitor is already logged in.
///
/// GET /admin/login
pub async fn login_page(admin: AdminSession) -> Response {
    if admin.is_authenticated() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    LoginTemplate {
        error: String::new(),
    }
    .into_response()
}

/// Check the password with the API and set the admin flag on success.
///
/// POST /admin/login
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    mut admin: AdminSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let password = SecretString::from(form.password);

    match state.api().admin_login(&password).await {
        Ok(()) => {
            admin.login().await?;
            add_breadcrumb("auth", "Admin logged in");
            tracing::info!("Admin logged in");
            Ok(Redirect::to(DASHBOARD_PATH).into_response())
        }
        Err(e) => {
            let (status, error) = login_failure(&e);
            tracing::warn!(error = %e, "Admin login rejected");
            Ok((status, LoginTemplate { error }).into_response())
        }
    }
}

/// Status and message for a failed login.
fn login_failure(error: &ApiError) -> (StatusCode, String) {
    match error {
        ApiError::Api { .. } => (
            StatusCode::UNAUTHORIZED,
            error
                .server_message()
                .unwrap_or(INVALID_PASSWORD_MESSAGE)
                .to_string(),
        ),
        ApiError::Http(_) | ApiError::Parse(_) => {
            (StatusCode::BAD_GATEWAY, LOGIN_FAILED_MESSAGE.to_string())
        }
    }
}

/// Clear the admin flag.
///
/// POST /admin/logout
pub async fn logout(mut admin: AdminSession) -> Result<Redirect, AppError> {
    admin.logout().await?;
    add_breadcrumb("auth", "Admin logged out");
    Ok(Redirect::to(LOGIN_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_password_uses_server_message() {
        let err = ApiError::Api {
            status: 401,
            message: Some("Invalid password".to_string()),
        };
        assert_eq!(
            login_failure(&err),
            (StatusCode::UNAUTHORIZED, "Invalid password".to_string())
        );
    }

    #[test]
    fn test_rejected_password_without_message() {
        let err = ApiError::Api {
            status: 403,
            message: None,
        };
        assert_eq!(login_failure(&err).1, INVALID_PASSWORD_MESSAGE);
    }

    #[test]
    fn test_unreachable_api() {
        let err = ApiError::Parse("bad body".to_string());
        assert_eq!(
            login_failure(&err),
            (StatusCode::BAD_GATEWAY, LOGIN_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_login_page_renders_error() {
        let html = LoginTemplate {
            error: "Invalid password".to_string(),
        }
        .render()
        .unwrap_or_default();
        assert!(html.contains("Invalid password"));
        assert!(html.contains(r#"type="password""#));
    }
}
