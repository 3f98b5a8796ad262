//! Core types for the workshop site.
//!
//! This module provides type-safe wrappers for the records served by the
//! workshop API.

pub mod attendee;
pub mod designation;
pub mod id;
pub mod load_state;
pub mod session;
pub mod speaker;

mod serde_helpers;

pub use attendee::{Attendee, NewAttendee};
pub use designation::{DESIGNATIONS, Designation};
pub use id::*;
pub use load_state::LoadState;
pub use session::{Session, SessionInput};
pub use speaker::{Speaker, SpeakerInput};
