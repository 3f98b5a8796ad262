//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Admin guard (only on `/admin` routes other than login)

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{AdminSession, require_admin};
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
