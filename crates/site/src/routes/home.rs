//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::registration::COUNT_POLL_INTERVAL;

use super::registration::RegistrationFormView;

/// Google Maps embed for the venue.
const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3930.310034205593!2d73.92600257972352!3d18.515585566381823!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bc2c18cf4eaad8d%3A0xc5835f1d9e3a91d3!2sAppDirect%20India!5e0!3m2!1sen!2sin!4v1762854087901!5m2!1sen!2sin";

/// Landing page template.
///
/// The sessions section and the attendee count are loaded by HTMX after
/// the page arrives.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Empty registration form.
    pub form: RegistrationFormView,
    /// Count polling period for `hx-trigger="every Ns"`.
    pub poll_seconds: u64,
    pub map_embed_url: &'static str,
}

/// Display the landing page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        form: RegistrationFormView::empty(),
        poll_seconds: COUNT_POLL_INTERVAL.as_secs(),
        map_embed_url: MAP_EMBED_URL,
    }
}
