//! Sessions joined with speakers.

use workshop_site::api::WorkshopClient;
use workshop_site::schedule::{EMPTY_SCHEDULE_MESSAGE, Schedule};

use super::CliError;

/// Print every session card.
///
/// # Errors
///
/// Returns error if the sessions request fails.
#[allow(clippy::print_stdout)]
pub async fn run(client: &WorkshopClient) -> Result<(), CliError> {
    let schedule = Schedule::load(client).await;
    if let Some(error) = schedule.sessions.error() {
        return Err(CliError::Unavailable {
            resource: "sessions",
            reason: error.to_string(),
        });
    }

    let cards = schedule.cards();
    if cards.is_empty() {
        println!("{EMPTY_SCHEDULE_MESSAGE}");
        return Ok(());
    }

    for card in cards {
        println!("{} ({} {})", card.title, card.date, card.time);
        println!("  {}", card.description);
        if card.has_speaker {
            println!("  Speaker: {} - {}", card.speaker_name, card.speaker_bio);
        }
        println!();
    }
    Ok(())
}
