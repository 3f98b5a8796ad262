//! Attendee registration.

use workshop_site::api::WorkshopClient;
use workshop_site::registration::{self, RegistrationForm};

use super::CliError;

/// Register an attendee with the same validation as the web form.
///
/// # Errors
///
/// Returns error if a field is blank or the API rejects the registration.
#[allow(clippy::print_stdout)]
pub async fn run(
    client: &WorkshopClient,
    name: String,
    email: String,
    designation: String,
) -> Result<(), CliError> {
    let form = RegistrationForm {
        name,
        email,
        designation,
    };
    let attendee = registration::register(client, &form).await?;
    println!("Registered {} <{}>", attendee.name, attendee.email);
    Ok(())
}
