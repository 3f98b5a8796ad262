//! Designation breakdown of registered attendees.

use workshop_core::Attendee;

/// Chart colours, reused cyclically. The pie colours designations by
/// first-seen order, the ranking by rank.
pub const PALETTE: [&str; 9] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#ef4444", "#06b6d4", "#84cc16",
    "#6366f1",
];

/// Palette colour at `index`, wrapping around.
#[must_use]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE
        .get(index % PALETTE.len())
        .copied()
        .unwrap_or("#3b82f6")
}

/// How many designations the ranking shows.
pub const TOP_COUNT: usize = 5;

/// Label for attendees registered without a designation.
const UNSPECIFIED: &str = "Unspecified";

/// Attendee count for one designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignationCount {
    pub name: String,
    pub count: usize,
    /// Index into [`PALETTE`] order (first-seen position).
    pub position: usize,
}

impl DesignationCount {
    /// Chart colour for this designation.
    #[must_use]
    pub fn color(&self) -> &'static str {
        palette_color(self.position)
    }
}

/// Attendees grouped by designation, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignationBreakdown {
    pub total: usize,
    pub entries: Vec<DesignationCount>,
}

impl DesignationBreakdown {
    /// Count attendees per designation.
    #[must_use]
    pub fn from_attendees(attendees: &[Attendee]) -> Self {
        let mut entries: Vec<DesignationCount> = Vec::new();

        for attendee in attendees {
            let name = match attendee.designation.as_str() {
                "" => UNSPECIFIED,
                name => name,
            };

            if let Some(entry) = entries.iter_mut().find(|entry| entry.name == name) {
                entry.count += 1;
            } else {
                entries.push(DesignationCount {
                    name: name.to_owned(),
                    count: 1,
                    position: entries.len(),
                });
            }
        }

        Self {
            total: attendees.len(),
            entries,
        }
    }

    /// Whether there is nothing to chart.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct designations.
    #[must_use]
    pub const fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Share of `count` in the total, rounded to the nearest whole percent.
    #[must_use]
    pub fn percent(&self, count: usize) -> usize {
        if self.total == 0 {
            return 0;
        }
        (count * 100 + self.total / 2) / self.total
    }

    /// Chart label, e.g. `"Tech Lead: 40%"`.
    #[must_use]
    pub fn label(&self, entry: &DesignationCount) -> String {
        format!("{}: {}%", entry.name, self.percent(entry.count))
    }

    /// The `n` largest designations by count, ties in first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&DesignationCount> {
        let mut ranked: Vec<&DesignationCount> = self.entries.iter().collect();
        // Stable sort keeps first-seen order among equal counts.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
