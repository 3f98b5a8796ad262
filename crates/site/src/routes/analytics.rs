//! Designation analytics panel.

use askama::Template;
use workshop_core::LoadState;

use crate::admin::analytics::{DesignationBreakdown, TOP_COUNT, palette_color};
use crate::api::WorkshopClient;

use super::render;

/// Analytics panel: totals, pie chart and the top designations.
#[derive(Template)]
#[template(path = "admin/analytics_panel.html")]
pub struct AnalyticsPanelTemplate {
    /// The attendee fetch failed; the figures below are blank.
    pub failed: bool,
    pub total: usize,
    pub distinct: usize,
    /// CSS `conic-gradient(...)` for the pie; empty when there is no data.
    pub pie: String,
    pub legend: Vec<LegendEntry>,
    pub top: Vec<RankedEntry>,
}

/// Pie legend item.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Top designations row.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub count: usize,
    pub percent: usize,
    pub color: &'static str,
}

impl From<&DesignationBreakdown> for AnalyticsPanelTemplate {
    fn from(breakdown: &DesignationBreakdown) -> Self {
        let legend = breakdown
            .entries
            .iter()
            .map(|entry| LegendEntry {
                label: breakdown.label(entry),
                color: entry.color(),
            })
            .collect();

        let top = breakdown
            .top(TOP_COUNT)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                name: entry.name.clone(),
                count: entry.count,
                percent: breakdown.percent(entry.count),
                color: palette_color(i),
            })
            .collect();

        Self {
            failed: false,
            total: breakdown.total,
            distinct: breakdown.distinct(),
            pie: pie_gradient(breakdown),
            legend,
            top,
        }
    }
}

/// Build a `conic-gradient` with one slice per designation.
///
/// Slice bounds are in hundredths of a percent so no float math is needed.
fn pie_gradient(breakdown: &DesignationBreakdown) -> String {
    if breakdown.is_empty() || breakdown.total == 0 {
        return String::new();
    }

    let mut start = 0;
    let stops: Vec<String> = breakdown
        .entries
        .iter()
        .map(|entry| {
            let end = start + entry.count * 10_000 / breakdown.total;
            let stop = format!(
                "{} {}.{:02}% {}.{:02}%",
                entry.color(),
                start / 100,
                start % 100,
                end / 100,
                end % 100
            );
            start = end;
            stop
        })
        .collect();

    format!("conic-gradient({})", stops.join(", "))
}

/// The analytics panel, computed from a fresh attendee list.
pub async fn render_panel(api: &WorkshopClient) -> String {
    let attendees = LoadState::from_result(api.list_attendees().await);
    if let Some(error) = attendees.error() {
        tracing::error!(error, "Failed to fetch attendees for analytics");
    }
    let breakdown = DesignationBreakdown::from_attendees(attendees.as_slice());
    render(&AnalyticsPanelTemplate {
        failed: attendees.error().is_some(),
        ..AnalyticsPanelTemplate::from(&breakdown)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use workshop_core::Attendee;

    use super::*;
    use crate::admin::analytics::PALETTE;

    fn breakdown(designations: &[&str]) -> DesignationBreakdown {
        let attendees: Vec<Attendee> = designations
            .iter()
            .enumerate()
            .map(|(i, d)| serde_json::from_value(json!({"id": i.to_string(), "designation": d})).unwrap())
            .collect();
        DesignationBreakdown::from_attendees(&attendees)
    }

    #[test]
    fn test_panel_ranks_and_labels() {
        let panel = AnalyticsPanelTemplate::from(&breakdown(&["Student", "Tech Lead", "Tech Lead"]));
        assert_eq!(panel.total, 3);
        assert_eq!(panel.distinct, 2);
        assert_eq!(panel.top[0].name, "Tech Lead");
        assert_eq!(panel.top[0].rank, 1);
        assert_eq!(panel.legend[0].label, "Student: 33%");
        assert_eq!(panel.legend[1].label, "Tech Lead: 67%");
    }

    #[test]
    fn test_ranking_colours_follow_rank() {
        let panel = AnalyticsPanelTemplate::from(&breakdown(&["Student", "Tech Lead", "Tech Lead"]));
        assert_eq!(panel.top[0].name, "Tech Lead");
        assert_eq!(panel.top[0].color, PALETTE[0]);
        assert_eq!(panel.top[1].color, PALETTE[1]);
        // The pie keeps first-seen colours.
        assert_eq!(panel.legend[0].color, PALETTE[0]);
        assert_eq!(panel.legend[1].color, PALETTE[1]);
        assert!(panel.pie.starts_with("conic-gradient(#3b82f6 0.00% 33.33%"));
    }

    #[test]
    fn test_failed_fetch_shows_notice() {
        let html = AnalyticsPanelTemplate {
            failed: true,
            ..AnalyticsPanelTemplate::from(&DesignationBreakdown::default())
        }
        .render()
        .unwrap();
        assert!(html.contains("Could not load attendees"));
        assert!(!html.contains("No data available"));
    }

    #[test]
    fn test_pie_gradient_slices() {
        let pie = pie_gradient(&breakdown(&["A", "B", "B", "B"]));
        assert_eq!(pie, "conic-gradient(#3b82f6 0.00% 25.00%, #8b5cf6 25.00% 100.00%)");
    }

    #[test]
    fn test_empty_panel() {
        let panel = AnalyticsPanelTemplate::from(&DesignationBreakdown::default());
        assert!(panel.pie.is_empty());
        let html = panel.render().unwrap();
        assert!(html.contains("No data available"));
    }
}
