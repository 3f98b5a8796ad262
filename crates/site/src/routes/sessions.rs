//! Session management panel.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;
use workshop_core::{LoadState, Session, SessionId, SessionInput, Speaker};

use crate::admin::forms::{
    CONFIRM_DELETE_SESSION, DELETE_SESSION_FAILED, DeleteForm, SAVE_SESSION_FAILED, SessionForm,
};
use crate::api::{ApiError, WorkshopClient};
use crate::error::{AppError, add_breadcrumb};
use crate::schedule::{DATE_PLACEHOLDER, TITLE_PLACEHOLDER, find_speaker};
use crate::state::AppState;

use super::dashboard::{ConfirmDeleteTemplate, panel_closing_modal};
use super::{alert_response, render, render_html};

/// Speaker column text for sessions without a (known) speaker.
pub const NO_SPEAKER: &str = "No speaker assigned";

/// Session list with add/edit/delete controls.
#[derive(Template)]
#[template(path = "admin/sessions_panel.html")]
pub struct SessionsPanelTemplate {
    pub rows: LoadState<Vec<SessionRow>>,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct SessionRow {
    pub id: String,
    pub title: String,
    pub when: String,
    pub speaker: String,
}

impl SessionRow {
    fn new(session: &Session, speakers: &[Speaker]) -> Self {
        let date = session.date.as_deref().unwrap_or(DATE_PLACEHOLDER);
        let when = match session.time.as_deref() {
            Some(time) => format!("{date} {time}"),
            None => date.to_string(),
        };
        let speaker = find_speaker(speakers, session.speaker_id.as_ref())
            .and_then(|speaker| speaker.name.clone())
            .unwrap_or_else(|| NO_SPEAKER.to_string());

        Self {
            id: session.id.to_string(),
            title: session
                .title
                .clone()
                .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            when,
            speaker,
        }
    }
}

/// One `<option>` of the speaker select.
#[derive(Debug, Clone)]
pub struct SpeakerOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// Add/edit session modal.
#[derive(Template)]
#[template(path = "admin/session_modal.html")]
pub struct SessionModalTemplate {
    /// Empty when adding.
    pub id: String,
    pub input: SessionInput,
    pub speakers: Vec<SpeakerOption>,
}

impl SessionModalTemplate {
    fn new(id: String, input: SessionInput, speakers: &[Speaker]) -> Self {
        let speakers = speakers
            .iter()
            .map(|speaker| SpeakerOption {
                id: speaker.id.to_string(),
                name: speaker.name.clone().unwrap_or_else(|| speaker.id.to_string()),
                selected: input.speaker_id.as_ref() == Some(&speaker.id),
            })
            .collect();
        Self {
            id,
            input,
            speakers,
        }
    }

    fn heading(&self) -> &'static str {
        if self.id.is_empty() {
            "Add Session"
        } else {
            "Edit Session"
        }
    }

    fn no_speaker_selected(&self) -> bool {
        !self.speakers.iter().any(|option| option.selected)
    }
}

/// Speakers for the speaker column and picker; a failed fetch leaves
/// them empty so sessions stay editable.
fn speakers_or_empty(speakers: Result<Vec<Speaker>, ApiError>) -> Vec<Speaker> {
    speakers.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to fetch speakers for sessions");
        Vec::new()
    })
}

/// The session panel, freshly fetched.
pub async fn render_panel(api: &WorkshopClient) -> String {
    let (sessions, speakers) = tokio::join!(api.list_sessions(), api.list_speakers());
    let speakers = speakers_or_empty(speakers);

    let rows = LoadState::from_result(sessions).map(|sessions| {
        sessions
            .iter()
            .map(|session| SessionRow::new(session, &speakers))
            .collect::<Vec<_>>()
    });
    if let Some(error) = rows.error() {
        tracing::error!(error, "Failed to fetch sessions");
    }
    render(&SessionsPanelTemplate { rows })
}

/// Empty modal for a new session.
///
/// GET /admin/sessions/new
#[instrument(skip(state))]
pub async fn new_modal(State(state): State<AppState>) -> Html<String> {
    let speakers = speakers_or_empty(state.api().list_speakers().await);
    render_html(&SessionModalTemplate::new(
        String::new(),
        SessionInput::default(),
        &speakers,
    ))
}

/// Modal pre-filled with an existing session.
///
/// GET /admin/sessions/{id}/edit
#[instrument(skip(state))]
pub async fn edit_modal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = SessionId::new(id);
    let (sessions, speakers) =
        tokio::join!(state.api().list_sessions(), state.api().list_speakers());
    let sessions = sessions?;
    let speakers = speakers_or_empty(speakers);

    let session = sessions
        .iter()
        .find(|session| session.id == id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;

    Ok(render_html(&SessionModalTemplate::new(
        id.to_string(),
        session.to_input(),
        &speakers,
    )))
}

/// Create or update a session.
///
/// POST /admin/sessions
#[instrument(skip(state, form))]
pub async fn save(State(state): State<AppState>, Form(form): Form<SessionForm>) -> Response {
    match form.save(state.api()).await {
        Ok(outcome) => {
            add_breadcrumb("sessions", &format!("Session {outcome:?}"));
            tracing::info!(?outcome, "Session saved");
            panel_closing_modal(&render_panel(state.api()).await).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save session");
            alert_response(SAVE_SESSION_FAILED)
        }
    }
}

/// Ask before deleting.
///
/// GET /admin/sessions/{id}/delete
pub async fn confirm_delete(Path(id): Path<String>) -> Html<String> {
    render_html(&ConfirmDeleteTemplate {
        message: CONFIRM_DELETE_SESSION,
        action: format!("/admin/sessions/{}/delete", urlencoding::encode(&id)),
    })
}

/// Delete a session once confirmed. A declined request changes nothing.
///
/// POST /admin/sessions/{id}/delete
#[instrument(skip(state, form))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Response {
    if !form.confirm {
        return panel_closing_modal(&render_panel(state.api()).await).into_response();
    }

    let id = SessionId::new(id);
    match state.api().delete_session(&id).await {
        Ok(()) => {
            add_breadcrumb("sessions", &format!("Deleted session {id}"));
            tracing::info!(%id, "Session deleted");
            panel_closing_modal(&render_panel(state.api()).await).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %id, "Failed to delete session");
            alert_response(DELETE_SESSION_FAILED)
        }
    }
}
