//! Attendee count, once or continuously.

use workshop_site::api::WorkshopClient;
use workshop_site::registration::{COUNT_POLL_INTERVAL, CountPoller};

use super::CliError;

/// Print the current count.
///
/// # Errors
///
/// Returns error if the API request fails.
#[allow(clippy::print_stdout)]
pub async fn once(client: &WorkshopClient) -> Result<(), CliError> {
    let count = client.attendee_count().await?;
    println!("{count}");
    Ok(())
}

/// Print the count whenever it changes until Ctrl+C.
///
/// Fetch errors are logged by the poller and the last value is kept.
#[allow(clippy::print_stdout)]
pub async fn watch(client: WorkshopClient) {
    let poller = CountPoller::spawn(client, COUNT_POLL_INTERVAL);
    let mut updates = poller.subscribe();
    let mut last_printed = None;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let count = *updates.borrow_and_update();
                if last_printed != Some(count) {
                    println!("{count}");
                    last_printed = Some(count);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping count watch");
                poller.cancel();
                break;
            }
        }
    }
}
