//! AppDirect India AI Workshop site.
//!
//! Server-rendered landing page with registration, plus a password-gated
//! admin dashboard. All data lives behind the workshop REST API; this
//! crate holds no records of its own.
//!
//! # Modules
//!
//! - [`api`] - Typed client for the workshop REST API
//! - [`registration`] - Form validation, submission and count polling
//! - [`schedule`] - Session cards joined with their speakers
//! - [`admin`] - Dashboard tabs, attendee search, analytics, CRUD forms
//! - [`routes`] - Axum handlers and Askama templates (HTMX fragments)
//! - [`middleware`] - Session layer, request IDs and the admin guard

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod registration;
pub mod routes;
pub mod schedule;
pub mod state;

use axum::Router;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Build the site router with sessions, request IDs and request tracing.
///
/// Sentry layers are left to the binary so tests can serve the same app
/// without a Sentry client.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
