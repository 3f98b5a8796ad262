//! Workshop Core - Shared types library.
//!
//! This crate provides common types used across all workshop components:
//! - `site` - Public landing page, registration and admin dashboard
//! - `cli` - Command-line tools for the workshop API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! record is owned by the remote workshop API; these are the shapes it
//! sends and accepts.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, attendee/speaker/session records, designations
//!   and the [`LoadState`] used for fetched collections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
