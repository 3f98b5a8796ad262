//! Registration form and attendee counter, end to end.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use workshop_integration_tests::{Resource, TestContext, header};
use workshop_site::api::WorkshopClient;
use workshop_site::config::ApiConfig;
use workshop_site::registration::CountPoller;

#[tokio::test]
async fn test_landing_page_renders_sections() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    assert!(body.contains("AI Workshop"));
    assert!(body.contains(r#"hx-get="/schedule""#));
    assert!(body.contains("every 5s, attendee-registered from:body"));
    assert!(body.contains("Event Location"));
    assert!(body.contains("Admin Login"));
}

#[tokio::test]
async fn test_blank_field_never_calls_api() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .htmx_post(
            "/register",
            &[("name", "Asha"), ("email", "   "), ("designation", "Tech Lead")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(header(&resp, "HX-Trigger").is_none());
    let body = resp.text().await.unwrap();

    assert!(body.contains("Please fill in all fields"));
    assert!(body.contains(r#"value="Asha""#), "submitted values are kept");
    assert_eq!(ctx.api.calls("POST /attendees"), 0);
}

#[tokio::test]
async fn test_successful_registration_clears_form_and_triggers_count() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .htmx_post(
            "/register",
            &[
                ("name", " Asha Rao "),
                ("email", "asha@example.com"),
                ("designation", "Tech Lead"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "HX-Trigger"), Some("attendee-registered"));
    let body = resp.text().await.unwrap();

    assert!(body.contains("Registration Successful!"));
    assert!(body.contains(r#"hx-trigger="load delay:3000ms""#));
    assert!(!body.contains("Asha Rao"), "form is cleared");

    let stored = ctx.api.records(Resource::Attendees);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["name"], "Asha Rao");
    assert_eq!(stored[0]["designation"], "Tech Lead");

    let count = ctx.htmx_get("/attendees/count").await.text().await.unwrap();
    assert!(count.contains("<strong>1</strong> attendee registered"));
}

#[tokio::test]
async fn test_popup_survives_following_submission() {
    let ctx = TestContext::new().await;

    let first = ctx
        .htmx_post(
            "/register",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("designation", "Tech Lead"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(first.contains(r#"<div id="registration-popup" hx-swap-oob="true">"#));
    assert!(first.trim_start().starts_with(r#"<form id="registration-form""#));

    let second = ctx
        .htmx_post("/register", &[("name", ""), ("email", ""), ("designation", "")])
        .await
        .text()
        .await
        .unwrap();
    assert!(second.contains("Please fill in all fields"));
    assert!(!second.contains("registration-popup"), "popup slot untouched");
    assert!(!second.contains("Registration Successful!"));
}

#[tokio::test]
async fn test_landing_page_has_popup_slot_outside_form() {
    let ctx = TestContext::new().await;
    let body = ctx.get("/").await.text().await.unwrap();

    let slot = body.find(r#"<div id="registration-popup""#).unwrap();
    let form = body.find(r#"<form id="registration-form""#).unwrap();
    assert!(slot < form);
}

#[tokio::test]
async fn test_server_error_message_surfaces() {
    let ctx = TestContext::new().await;
    ctx.api.fail(
        "POST /attendees",
        axum::http::StatusCode::CONFLICT,
        Some("Email already registered"),
    );

    let body = ctx
        .htmx_post(
            "/register",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("designation", "Student"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(body.contains("Email already registered"));
    assert!(body.contains(r#"value="asha@example.com""#));
    assert!(!body.contains("Registration Successful!"));
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let ctx = TestContext::new().await;
    ctx.api
        .fail("POST /attendees", axum::http::StatusCode::INTERNAL_SERVER_ERROR, None);

    let body = ctx
        .htmx_post(
            "/register",
            &[("name", "A"), ("email", "a@example.com"), ("designation", "Other")],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(body.contains("Registration failed. Please try again."));
}

#[tokio::test]
async fn test_dismiss_returns_empty_fragment() {
    let ctx = TestContext::new().await;
    let resp = ctx.htmx_get("/register/dismiss").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_count_failure_leaves_display_unchanged() {
    let ctx = TestContext::new().await;
    ctx.api.fail(
        "GET /attendees/count",
        axum::http::StatusCode::SERVICE_UNAVAILABLE,
        None,
    );

    let resp = ctx.htmx_get("/attendees/count").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_count_poller_against_api() {
    let ctx = TestContext::new().await;
    ctx.api.seed(
        Resource::Attendees,
        json!([
            {"id": "a1", "name": "Asha", "email": "a@example.com", "designation": "Student"},
            {"id": "a2", "name": "Ben", "email": "b@example.com", "designation": "Other"}
        ]),
    );

    let client = WorkshopClient::new(&ApiConfig::new(&ctx.api_url).unwrap()).unwrap();
    let poller = CountPoller::spawn(client, Duration::from_millis(50));
    let mut updates = poller.subscribe();

    tokio::time::timeout(Duration::from_secs(5), updates.changed())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(poller.latest(), 2);

    poller.cancel();
    tokio::time::timeout(Duration::from_secs(5), async {
        while !poller.is_finished() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();
}
