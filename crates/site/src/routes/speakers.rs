//! Speaker management panel.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;
use workshop_core::{LoadState, Speaker, SpeakerId};

use crate::admin::forms::{
    CONFIRM_DELETE_SPEAKER, DELETE_SPEAKER_FAILED, DeleteForm, SAVE_SPEAKER_FAILED, SpeakerForm,
};
use crate::api::WorkshopClient;
use crate::error::{AppError, add_breadcrumb};
use crate::state::AppState;

use super::dashboard::{ConfirmDeleteTemplate, panel_closing_modal};
use super::{alert_response, render, render_html};

/// Speaker list with add/edit/delete controls.
#[derive(Template)]
#[template(path = "admin/speakers_panel.html")]
pub struct SpeakersPanelTemplate {
    pub speakers: LoadState<Vec<Speaker>>,
}

/// Add/edit speaker modal.
#[derive(Template)]
#[template(path = "admin/speaker_modal.html")]
pub struct SpeakerModalTemplate {
    /// Empty when adding.
    pub id: String,
    pub name: String,
    pub bio: String,
}

impl SpeakerModalTemplate {
    fn heading(&self) -> &'static str {
        if self.id.is_empty() {
            "Add Speaker"
        } else {
            "Edit Speaker"
        }
    }
}

/// The speaker panel, freshly fetched.
pub async fn render_panel(api: &WorkshopClient) -> String {
    let speakers = LoadState::from_result(api.list_speakers().await);
    if let Some(error) = speakers.error() {
        tracing::error!(error, "Failed to fetch speakers");
    }
    render(&SpeakersPanelTemplate { speakers })
}

/// Empty modal for a new speaker.
///
/// GET /admin/speakers/new
pub async fn new_modal() -> Html<String> {
    render_html(&SpeakerModalTemplate {
        id: String::new(),
        name: String::new(),
        bio: String::new(),
    })
}

/// Modal pre-filled with an existing speaker.
///
/// GET /admin/speakers/{id}/edit
#[instrument(skip(state))]
pub async fn edit_modal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = SpeakerId::new(id);
    let speakers = state.api().list_speakers().await?;
    let speaker = speakers
        .iter()
        .find(|speaker| speaker.id == id)
        .ok_or_else(|| AppError::NotFound(format!("speaker {id}")))?;

    let input = speaker.to_input();
    Ok(render_html(&SpeakerModalTemplate {
        id: id.to_string(),
        name: input.name,
        bio: input.bio,
    }))
}

/// Create or update a speaker.
///
/// POST /admin/speakers
#[instrument(skip(state, form))]
pub async fn save(State(state): State<AppState>, Form(form): Form<SpeakerForm>) -> Response {
    match form.save(state.api()).await {
        Ok(outcome) => {
            add_breadcrumb("speakers", &format!("Speaker {outcome:?}"));
            tracing::info!(?outcome, "Speaker saved");
            panel_closing_modal(&render_panel(state.api()).await).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save speaker");
            alert_response(SAVE_SPEAKER_FAILED)
        }
    }
}

/// Ask before deleting.
///
/// GET /admin/speakers/{id}/delete
pub async fn confirm_delete(Path(id): Path<String>) -> Html<String> {
    render_html(&ConfirmDeleteTemplate {
        message: CONFIRM_DELETE_SPEAKER,
        action: format!("/admin/speakers/{}/delete", urlencoding::encode(&id)),
    })
}

/// Delete a speaker once confirmed. A declined request changes nothing.
///
/// POST /admin/speakers/{id}/delete
#[instrument(skip(state, form))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Response {
    if !form.confirm {
        return panel_closing_modal(&render_panel(state.api()).await).into_response();
    }

    let id = SpeakerId::new(id);
    match state.api().delete_speaker(&id).await {
        Ok(()) => {
            add_breadcrumb("speakers", &format!("Deleted speaker {id}"));
            tracing::info!(%id, "Speaker deleted");
            panel_closing_modal(&render_panel(state.api()).await).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %id, "Failed to delete speaker");
            alert_response(DELETE_SPEAKER_FAILED)
        }
    }
}
