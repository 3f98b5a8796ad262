//! Sessions joined with their speakers, for the public schedule.
//!
//! Sessions and speakers are fetched concurrently and joined by the
//! session's speaker reference. A reference to a speaker that is not in the
//! loaded collection just means "no speaker".

use workshop_core::{LoadState, Session, Speaker, SpeakerId};

use crate::api::WorkshopClient;

pub const DATE_PLACEHOLDER: &str = "TBA";
pub const TITLE_PLACEHOLDER: &str = "Untitled Session";
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";
pub const SPEAKER_NAME_PLACEHOLDER: &str = "Unknown Speaker";
pub const BIO_PLACEHOLDER: &str = "No bio available.";
pub const EMPTY_SCHEDULE_MESSAGE: &str = "No sessions available yet. Check back soon!";

/// Both collections as loaded for one render.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub sessions: LoadState<Vec<Session>>,
    /// Empty when the speaker fetch failed.
    pub speakers: Vec<Speaker>,
}

impl Schedule {
    /// Fetch sessions and speakers concurrently and wait for both.
    ///
    /// A sessions failure is kept as [`LoadState::Failed`]. A speakers
    /// failure degrades to an empty speaker list.
    pub async fn load(client: &WorkshopClient) -> Self {
        let (sessions, speakers) = tokio::join!(client.list_sessions(), client.list_speakers());

        if let Err(e) = &sessions {
            tracing::error!(error = %e, "Failed to fetch sessions");
        }

        let speakers = speakers.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch speakers");
            Vec::new()
        });

        Self {
            sessions: LoadState::from_result(sessions),
            speakers,
        }
    }

    /// One display card per loaded session, in API order.
    #[must_use]
    pub fn cards(&self) -> Vec<SessionCard> {
        self.sessions
            .as_slice()
            .iter()
            .map(|session| SessionCard::new(session, &self.speakers))
            .collect()
    }

    /// Whether the sessions fetch failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.sessions, LoadState::Failed(_))
    }
}

/// First speaker whose ID matches `id`.
#[must_use]
pub fn find_speaker<'a>(speakers: &'a [Speaker], id: Option<&SpeakerId>) -> Option<&'a Speaker> {
    let id = id?;
    speakers.iter().find(|speaker| &speaker.id == id)
}

/// A session ready to render, placeholders applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCard {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub has_speaker: bool,
    pub speaker_name: String,
    pub speaker_bio: String,
    pub speaker_initial: String,
}

impl SessionCard {
    /// Build a card, resolving the speaker against `speakers`.
    #[must_use]
    pub fn new(session: &Session, speakers: &[Speaker]) -> Self {
        let speaker = find_speaker(speakers, session.speaker_id.as_ref());

        Self {
            title: or_placeholder(session.title.as_deref(), TITLE_PLACEHOLDER),
            description: or_placeholder(session.description.as_deref(), DESCRIPTION_PLACEHOLDER),
            date: or_placeholder(session.date.as_deref(), DATE_PLACEHOLDER),
            time: or_placeholder(session.time.as_deref(), DATE_PLACEHOLDER),
            has_speaker: speaker.is_some(),
            speaker_name: or_placeholder(
                speaker.and_then(|s| s.name.as_deref()),
                SPEAKER_NAME_PLACEHOLDER,
            ),
            speaker_bio: or_placeholder(speaker.and_then(|s| s.bio.as_deref()), BIO_PLACEHOLDER),
            speaker_initial: speaker
                .and_then(|s| s.name.as_deref())
                .and_then(|name| name.chars().next())
                .map_or_else(|| "?".to_owned(), String::from),
        }
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value.unwrap_or(placeholder).to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sessions(value: serde_json::Value) -> Vec<Session> {
        serde_json::from_value(value).unwrap()
    }

    fn speakers(value: serde_json::Value) -> Vec<Speaker> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_session_resolves_speaker() {
        let sessions = sessions(json!([{"id": 1, "speakerId": "s1"}]));
        let speakers = speakers(json!([{"id": "s1", "name": "Ana"}]));

        let card = SessionCard::new(&sessions[0], &speakers);
        assert!(card.has_speaker);
        assert_eq!(card.speaker_name, "Ana");
        assert_eq!(card.speaker_initial, "A");
        assert_eq!(card.speaker_bio, BIO_PLACEHOLDER);
    }

    #[test]
    fn test_missing_speaker_renders_without_speaker() {
        let sessions = sessions(json!([{"id": 1, "speakerId": "s1"}]));

        let card = SessionCard::new(&sessions[0], &[]);
        assert!(!card.has_speaker);
    }

    #[test]
    fn test_placeholders() {
        let sessions = sessions(json!([{"id": "x"}]));
        let card = SessionCard::new(&sessions[0], &[]);
        assert_eq!(card.title, "Untitled Session");
        assert_eq!(card.description, "No description available.");
        assert_eq!(card.date, "TBA");
        assert_eq!(card.time, "TBA");
    }

    #[test]
    fn test_nameless_speaker_placeholders() {
        let sessions = sessions(json!([{"id": "x", "speakerId": "s1"}]));
        let speakers = speakers(json!([{"id": "s1"}]));
        let card = SessionCard::new(&sessions[0], &speakers);
        assert!(card.has_speaker);
        assert_eq!(card.speaker_name, "Unknown Speaker");
        assert_eq!(card.speaker_initial, "?");
    }

    #[test]
    fn test_first_matching_speaker_wins() {
        let speakers = speakers(json!([
            {"id": "s1", "name": "First"},
            {"id": "s1", "name": "Second"}
        ]));
        let found = find_speaker(&speakers, Some(&SpeakerId::new("s1"))).unwrap();
        assert_eq!(found.name.as_deref(), Some("First"));
        assert!(find_speaker(&speakers, None).is_none());
    }

    #[test]
    fn test_failed_schedule_has_no_cards() {
        let schedule = Schedule {
            sessions: LoadState::Failed("timeout".to_owned()),
            speakers: Vec::new(),
        };
        assert!(schedule.is_failed());
        assert!(schedule.cards().is_empty());
    }
}
