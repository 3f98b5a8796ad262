//! Sessions & speakers fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::schedule::{EMPTY_SCHEDULE_MESSAGE, Schedule, SessionCard};
use crate::state::AppState;

/// Sessions section body, swapped into the landing page.
#[derive(Template, WebTemplate)]
#[template(path = "partials/schedule.html")]
pub struct ScheduleTemplate {
    pub cards: Vec<SessionCard>,
    pub empty_message: &'static str,
    /// The sessions fetch failed; the empty state gets a notice.
    pub failed: bool,
}

impl From<&Schedule> for ScheduleTemplate {
    fn from(schedule: &Schedule) -> Self {
        Self {
            cards: schedule.cards(),
            empty_message: EMPTY_SCHEDULE_MESSAGE,
            failed: schedule.is_failed(),
        }
    }
}

/// Fetch and render the schedule.
#[instrument(skip(state))]
pub async fn schedule(State(state): State<AppState>) -> impl IntoResponse {
    let schedule = Schedule::load(state.api()).await;
    ScheduleTemplate::from(&schedule)
}
