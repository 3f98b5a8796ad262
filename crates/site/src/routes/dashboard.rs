//! Admin dashboard shell, tab switching and the modal slot.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::instrument;

use crate::admin::Tab;
use crate::state::AppState;

use super::{analytics, attendees, render, sessions, speakers};

/// Dashboard page: header, tab region and an empty modal slot.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    /// Pre-rendered tab region.
    pub region: String,
}

/// One tab button.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Tab navigation plus the active panel.
#[derive(Template)]
#[template(path = "admin/tab_region.html")]
pub struct TabRegionTemplate {
    pub tabs: Vec<TabLink>,
    /// Pre-rendered panel.
    pub panel: String,
}

/// Delete confirmation dialog, shared by the speaker and session panels.
#[derive(Template)]
#[template(path = "admin/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub message: &'static str,
    /// POST target that performs the delete.
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct TabQuery {
    tab: Option<String>,
}

/// Render the dashboard on the requested tab.
///
/// GET /admin?tab=
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<TabQuery>,
) -> impl IntoResponse {
    let tab = Tab::from_slug(query.tab.as_deref());
    DashboardTemplate {
        region: render_region(&state, tab).await,
    }
}

/// Switch tabs.
///
/// GET /admin/panels/{tab}
#[instrument(skip(state))]
pub async fn panel(State(state): State<AppState>, Path(tab): Path<String>) -> Html<String> {
    let tab = Tab::from_slug(Some(&tab));
    Html(render_region(&state, tab).await)
}

/// Empty the modal slot.
///
/// GET /admin/modal/close
pub async fn close_modal() -> &'static str {
    ""
}

/// Tab navigation with `tab` active and its panel loaded.
pub async fn render_region(state: &AppState, tab: Tab) -> String {
    let tabs = Tab::ALL
        .into_iter()
        .map(|t| TabLink {
            slug: t.slug(),
            label: t.label(),
            active: t == tab,
        })
        .collect();

    render(&TabRegionTemplate {
        tabs,
        panel: render_panel(state, tab).await,
    })
}

/// The panel for one tab, freshly fetched.
pub async fn render_panel(state: &AppState, tab: Tab) -> String {
    let api = state.api();
    match tab {
        Tab::Attendees => attendees::render_panel(api).await,
        Tab::Speakers => speakers::render_panel(api).await,
        Tab::Sessions => sessions::render_panel(api).await,
        Tab::Analytics => analytics::render_panel(api).await,
    }
}

/// Panel markup plus an out-of-band swap that closes the modal.
pub fn panel_closing_modal(panel: &str) -> Html<String> {
    Html(format!(
        r#"{panel}<div id="modal" hx-swap-oob="true"></div>"#
    ))
}
