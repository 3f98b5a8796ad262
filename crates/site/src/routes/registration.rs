//! Registration form and attendee count handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use workshop_core::DESIGNATIONS;

use crate::registration::{self, RegistrationForm, SUCCESS_DISMISS_AFTER};
use crate::state::AppState;

/// HTMX event fired after a successful registration; the counter listens
/// for it and refreshes at once.
pub const REGISTERED_EVENT: &str = "attendee-registered";

/// One `<option>` of the designation select.
#[derive(Debug, Clone)]
pub struct DesignationOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Registration form state for rendering.
#[derive(Debug, Clone)]
pub struct RegistrationFormView {
    pub name: String,
    pub email: String,
    pub designations: Vec<DesignationOption>,
    /// Inline error; empty when there is none.
    pub error: String,
    /// Fill the popup slot beside the form (out-of-band swap).
    pub success: bool,
    /// Popup lifetime for `hx-trigger="load delay:Nms"`.
    pub dismiss_ms: u128,
}

impl RegistrationFormView {
    /// A blank form.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_values(&RegistrationForm::default())
    }

    /// A form keeping the submitted values.
    #[must_use]
    pub fn with_values(form: &RegistrationForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            designations: DESIGNATIONS
                .iter()
                .map(|&label| DesignationOption {
                    label,
                    selected: label == form.designation.trim(),
                })
                .collect(),
            error: String::new(),
            success: false,
            dismiss_ms: SUCCESS_DISMISS_AFTER.as_millis(),
        }
    }

    /// Whether no designation is selected (keeps the placeholder option).
    #[must_use]
    pub fn nothing_selected(&self) -> bool {
        !self.designations.iter().any(|option| option.selected)
    }
}

/// Registration form fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/registration_form.html")]
pub struct RegistrationFormTemplate {
    pub form: RegistrationFormView,
}

/// Attendee counter fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/attendee_count.html")]
pub struct AttendeeCountTemplate {
    pub count: u64,
}

/// Submit a registration.
///
/// POST /register
///
/// Validation errors and API failures re-render the form with the
/// submitted values and an inline message and leave the popup slot alone.
/// Success renders a cleared form, fills the popup slot out of band and
/// fires [`REGISTERED_EVENT`].
#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    match registration::register(state.api(), &form).await {
        Ok(_) => {
            let view = RegistrationFormView {
                success: true,
                ..RegistrationFormView::empty()
            };
            (
                [("HX-Trigger", REGISTERED_EVENT)],
                RegistrationFormTemplate { form: view },
            )
                .into_response()
        }
        Err(e) => {
            if matches!(e, registration::RegistrationError::Api(_)) {
                tracing::error!(error = %e, "Registration failed");
            }
            let view = RegistrationFormView {
                error: e.user_message().to_string(),
                ..RegistrationFormView::with_values(&form)
            };
            RegistrationFormTemplate { form: view }.into_response()
        }
    }
}

/// Remove the success popup.
///
/// GET /register/dismiss
pub async fn dismiss() -> &'static str {
    ""
}

/// Current attendee count.
///
/// GET /attendees/count
///
/// Answers 204 when the API fails so the displayed count stays as it was.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Response {
    match state.api().attendee_count().await {
        Ok(count) => AttendeeCountTemplate { count }.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch attendee count");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
