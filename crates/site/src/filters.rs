//! Askama filters used by the site templates.

use std::fmt::Display;

use chrono::{Datelike, Utc};

/// Year shown in the landing page footer, taken from the UTC clock at render
/// time. The piped value is ignored: `{{ ""|current_year }}`.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(footer_year())
}

fn footer_year() -> i32 {
    Utc::now().year()
}
