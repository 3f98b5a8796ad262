//! Attendee list panel and search.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;
use workshop_core::{Attendee, LoadState};

use crate::admin::search::filter_attendees;
use crate::api::WorkshopClient;
use crate::state::AppState;

use super::render;

/// Shown in the registered column when the API sent no timestamp.
const NO_DATE: &str = "—";

/// Attendee panel: search box and the results table.
#[derive(Template)]
#[template(path = "admin/attendees_panel.html")]
pub struct AttendeesPanelTemplate {
    /// Pre-rendered results.
    pub results: String,
}

/// Attendee table body and total.
#[derive(Template)]
#[template(path = "admin/attendee_results.html")]
pub struct AttendeeResultsTemplate {
    /// The attendee fetch failed; shown instead of the empty state.
    pub failed: bool,
    pub rows: Vec<AttendeeRow>,
    /// e.g. "Total: 3 attendees".
    pub total_label: String,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct AttendeeRow {
    pub initial: String,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub registered: String,
}

impl From<&Attendee> for AttendeeRow {
    fn from(attendee: &Attendee) -> Self {
        Self {
            initial: attendee.initial(),
            name: attendee.name.clone(),
            email: attendee.email.clone(),
            designation: attendee.designation.to_string(),
            registered: attendee.created_at.map_or_else(
                || NO_DATE.to_string(),
                |at| at.format("%Y-%m-%d").to_string(),
            ),
        }
    }
}

impl AttendeeResultsTemplate {
    /// Results for `term` among `attendees`.
    #[must_use]
    pub fn new(attendees: &[Attendee], term: &str) -> Self {
        let rows: Vec<AttendeeRow> = filter_attendees(attendees, term)
            .into_iter()
            .map(AttendeeRow::from)
            .collect();
        let total_label = total_label(rows.len());
        Self {
            failed: false,
            rows,
            total_label,
        }
    }

    /// Results for `term` among a fetched attendee list.
    #[must_use]
    pub fn from_state(attendees: &LoadState<Vec<Attendee>>, term: &str) -> Self {
        Self {
            failed: attendees.error().is_some(),
            ..Self::new(attendees.as_slice(), term)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn fetch_attendees(api: &WorkshopClient) -> LoadState<Vec<Attendee>> {
    let attendees = LoadState::from_result(api.list_attendees().await);
    if let Some(error) = attendees.error() {
        tracing::error!(error, "Failed to fetch attendees");
    }
    attendees
}

/// The attendee panel with every attendee listed.
pub async fn render_panel(api: &WorkshopClient) -> String {
    let attendees = fetch_attendees(api).await;
    render(&AttendeesPanelTemplate {
        results: render(&AttendeeResultsTemplate::from_state(&attendees, "")),
    })
}

/// Filter attendees. Re-fetches on every call.
///
/// GET /admin/attendees/search?q=
#[instrument(skip(state))]
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Html<String> {
    let attendees = fetch_attendees(state.api()).await;
    Html(render(&AttendeeResultsTemplate::from_state(&attendees, &query.q)))
}

fn total_label(count: usize) -> String {
    if count == 1 {
        "Total: 1 attendee".to_string()
    } else {
        format!("Total: {count} attendees")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn attendees() -> Vec<Attendee> {
        serde_json::from_value(json!([
            {"id": "1", "name": "Priya", "email": "priya@example.com",
             "designation": "Software Engineer", "createdAt": "2025-11-10T09:30:00Z"},
            {"id": "2", "name": "Rahul", "email": "rahul@example.com",
             "designation": "Product Manager"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_results_filter_and_total() {
        let results = AttendeeResultsTemplate::new(&attendees(), "eng");
        assert_eq!(results.rows.len(), 1);
        assert_eq!(results.total_label, "Total: 1 attendee");
        assert_eq!(results.rows[0].registered, "2025-11-10");
    }

    #[test]
    fn test_missing_date_placeholder() {
        let results = AttendeeResultsTemplate::new(&attendees(), "rahul");
        assert_eq!(results.rows[0].registered, NO_DATE);
    }

    #[test]
    fn test_no_match_renders_empty_state() {
        let html = AttendeeResultsTemplate::new(&attendees(), "zzz")
            .render()
            .unwrap();
        assert!(html.contains("No attendees found"));
        assert!(html.contains("Total: 0 attendees"));
    }

    #[test]
    fn test_failed_fetch_renders_notice() {
        let html = AttendeeResultsTemplate::from_state(&LoadState::Failed("down".to_string()), "")
            .render()
            .unwrap();
        assert!(html.contains("Could not load attendees"));
        assert!(!html.contains("No attendees found"));
    }
}
