//! Admin dashboard logic: tabs, attendee search, analytics and the CRUD
//! form protocol shared by the speaker and session panels.

pub mod analytics;
pub mod forms;
pub mod search;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Attendees,
    Speakers,
    Sessions,
    Analytics,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Attendees, Self::Speakers, Self::Sessions, Self::Analytics];

    /// Parse a tab from its slug. Unknown or missing values fall back to
    /// the default tab.
    #[must_use]
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug.map(str::trim) {
            Some("speakers") => Self::Speakers,
            Some("sessions") => Self::Sessions,
            Some("analytics") => Self::Analytics,
            _ => Self::Attendees,
        }
    }

    /// URL slug, as used in `?tab=` and `/admin/panels/{tab}`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Attendees => "attendees",
            Self::Speakers => "speakers",
            Self::Sessions => "sessions",
            Self::Analytics => "analytics",
        }
    }

    /// Tab button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attendees => "Attendees",
            Self::Speakers => "Speakers",
            Self::Sessions => "Sessions",
            Self::Analytics => "Analytics",
        }
    }
}
