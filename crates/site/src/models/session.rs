//! Session-related types.
//!
//! Values stored in the session for admin authentication state.

/// Value stored under [`keys::ADMIN_AUTHENTICATED`] while logged in.
pub const AUTHENTICATED: &str = "true";

/// Session keys for authentication data.
pub mod keys {
    /// Key for the admin login flag.
    pub const ADMIN_AUTHENTICATED: &str = "adminAuthenticated";
}
