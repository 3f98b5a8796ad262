//! Attendee listing and designation analytics.

use workshop_site::admin::analytics::{DesignationBreakdown, TOP_COUNT};
use workshop_site::admin::search::filter_attendees;
use workshop_site::api::WorkshopClient;

use super::CliError;

/// Print attendees matching `term` (everyone when blank).
///
/// # Errors
///
/// Returns error if the API request fails.
#[allow(clippy::print_stdout)]
pub async fn list(client: &WorkshopClient, term: &str) -> Result<(), CliError> {
    let attendees = client.list_attendees().await?;
    let matches = filter_attendees(&attendees, term);

    for attendee in &matches {
        let registered = attendee
            .created_at
            .map_or_else(|| "—".to_string(), |at| at.format("%Y-%m-%d").to_string());
        println!(
            "{}\t{}\t{}\t{}",
            attendee.name, attendee.email, attendee.designation, registered
        );
    }
    println!("Total: {}", matches.len());
    Ok(())
}

/// Print the designation breakdown and the top designations.
///
/// # Errors
///
/// Returns error if the API request fails.
#[allow(clippy::print_stdout)]
pub async fn analytics(client: &WorkshopClient) -> Result<(), CliError> {
    let attendees = client.list_attendees().await?;
    let breakdown = DesignationBreakdown::from_attendees(&attendees);

    if breakdown.is_empty() {
        println!("No data available");
        return Ok(());
    }

    println!("Total Attendees: {}", breakdown.total);
    println!("Unique Designations: {}", breakdown.distinct());
    println!();
    for entry in &breakdown.entries {
        println!("{}", breakdown.label(entry));
    }
    println!();
    println!("Top Designations");
    for (rank, entry) in breakdown.top(TOP_COUNT).into_iter().enumerate() {
        println!("{}. {} ({})", rank + 1, entry.name, entry.count);
    }
    Ok(())
}
