//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Landing page
//! GET  /health                        - Health check
//! GET  /schedule                      - Sessions & speakers fragment (HTMX)
//! GET  /attendees/count               - Count fragment, 204 on upstream error (HTMX)
//! POST /register                      - Registration submit (returns form fragment)
//! GET  /register/dismiss              - Empty fragment (success popup auto-dismiss)
//!
//! # Admin auth
//! GET  /admin/login                   - Login page
//! POST /admin/login                   - Login submit
//! POST /admin/logout                  - Logout
//!
//! # Admin dashboard (guarded)
//! GET  /admin                         - Dashboard shell (?tab=)
//! GET  /admin/panels/{tab}            - Tab region fragment
//! GET  /admin/modal/close             - Empty modal slot
//! GET  /admin/attendees/search        - Attendee results fragment (?q=)
//! GET  /admin/speakers/new            - Speaker modal (empty)
//! GET  /admin/speakers/{id}/edit      - Speaker modal (pre-filled)
//! POST /admin/speakers                - Create or update speaker
//! GET  /admin/speakers/{id}/delete    - Confirm dialog
//! POST /admin/speakers/{id}/delete    - Delete (requires confirm=true)
//! GET  /admin/sessions/new            - Session modal (empty)
//! GET  /admin/sessions/{id}/edit      - Session modal (pre-filled)
//! POST /admin/sessions                - Create or update session
//! GET  /admin/sessions/{id}/delete    - Confirm dialog
//! POST /admin/sessions/{id}/delete    - Delete (requires confirm=true)
//! ```

pub mod analytics;
pub mod attendees;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod registration;
pub mod schedule;
pub mod sessions;
pub mod speakers;

use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

use crate::middleware::require_admin;
use crate::state::AppState;

/// HTMX event raised to show a blocking alert in the browser.
pub const ALERT_EVENT: &str = "workshop-alert";

/// Create the public routes router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/schedule", get(schedule::schedule))
        .route("/attendees/count", get(registration::count))
        .route("/register", post(registration::register))
        .route("/register/dismiss", get(registration::dismiss))
        .route("/admin/login", get(auth::login_page).post(auth::login))
}

/// Create the admin routes router. Every route sits behind the admin guard.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard::index))
        .route("/admin/logout", post(auth::logout))
        .route("/admin/panels/{tab}", get(dashboard::panel))
        .route("/admin/modal/close", get(dashboard::close_modal))
        .route("/admin/attendees/search", get(attendees::search))
        .route("/admin/speakers", post(speakers::save))
        .route("/admin/speakers/new", get(speakers::new_modal))
        .route("/admin/speakers/{id}/edit", get(speakers::edit_modal))
        .route(
            "/admin/speakers/{id}/delete",
            get(speakers::confirm_delete).post(speakers::delete),
        )
        .route("/admin/sessions", post(sessions::save))
        .route("/admin/sessions/new", get(sessions::new_modal))
        .route("/admin/sessions/{id}/edit", get(sessions::edit_modal))
        .route(
            "/admin/sessions/{id}/delete",
            get(sessions::confirm_delete).post(sessions::delete),
        )
        .route_layer(axum::middleware::from_fn(require_admin))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new().merge(public_routes()).merge(admin_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the API.
async fn health() -> &'static str {
    "ok"
}

/// Render a template, logging failures instead of propagating them.
pub(crate) fn render(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })
}

/// Render a template as an HTML response.
pub(crate) fn render_html(template: &impl Template) -> Html<String> {
    Html(render(template))
}

/// Raise a blocking browser alert and leave the page untouched.
///
/// Answers 200 so HTMX processes the headers; `HX-Reswap: none` prevents
/// any swap.
pub(crate) fn alert_response(message: &str) -> Response {
    let trigger = serde_json::json!({ ALERT_EVENT: { "value": message } }).to_string();
    (
        StatusCode::OK,
        [("HX-Reswap", "none".to_string()), ("HX-Trigger", trigger)],
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_response_headers() {
        let response = alert_response("Error saving speaker. Please try again.");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("HX-Reswap").unwrap(), "none");

        let trigger: serde_json::Value =
            serde_json::from_str(response.headers().get("HX-Trigger").unwrap().to_str().unwrap())
                .unwrap();
        assert_eq!(
            trigger[ALERT_EVENT]["value"],
            "Error saving speaker. Please try again."
        );
    }
}
