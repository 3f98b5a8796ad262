//! Local attendee search.

use workshop_core::Attendee;

/// Attendees whose name, email or designation contains `term`,
/// case-insensitively, in their original order.
///
/// A blank term matches everyone.
#[must_use]
pub fn filter_attendees<'a>(attendees: &'a [Attendee], term: &str) -> Vec<&'a Attendee> {
    let needle = term.trim().to_lowercase();
    attendees
        .iter()
        .filter(|attendee| needle.is_empty() || matches(attendee, &needle))
        .collect()
}

/// Whether any searchable field contains the already-lowercased `needle`.
fn matches(attendee: &Attendee, needle: &str) -> bool {
    [
        attendee.name.as_str(),
        attendee.email.as_str(),
        attendee.designation.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
