//! Admin dashboard panels, end to end.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use reqwest::StatusCode;
use serde_json::{Value, json};
use workshop_integration_tests::{Resource, TestContext, header};

async fn logged_in() -> TestContext {
    let ctx = TestContext::new().await;
    ctx.login().await;
    ctx
}

fn seed_attendees(ctx: &TestContext) {
    ctx.api.seed(
        Resource::Attendees,
        json!([
            {"id": "a1", "name": "Priya", "email": "priya@example.com",
             "designation": "Software Engineer", "createdAt": "2025-11-10T09:30:00Z"},
            {"id": "a2", "name": "Rahul", "email": "rahul@example.com",
             "designation": "Product Manager"},
            {"id": "a3", "name": "Meera", "email": "meera@example.com",
             "designation": "Software Engineer"}
        ]),
    );
}

#[tokio::test]
async fn test_dashboard_defaults_to_attendees_tab() {
    let ctx = logged_in().await;
    seed_attendees(&ctx);

    for path in ["/admin", "/admin?tab=bogus"] {
        let body = ctx.get(path).await.text().await.unwrap();
        assert!(body.contains("Attendee List"), "{path}");
        assert!(body.contains("Total: 3 attendees"), "{path}");
    }
}

#[tokio::test]
async fn test_tab_switch_renders_region_only() {
    let ctx = logged_in().await;

    let body = ctx.htmx_get("/admin/panels/speakers").await.text().await.unwrap();
    assert!(body.contains("Speaker Management"));
    assert!(!body.contains("<html"));
    assert!(!body.contains("Admin Dashboard"));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let ctx = logged_in().await;
    seed_attendees(&ctx);

    let body = ctx
        .htmx_get("/admin/attendees/search?q=ENG")
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Priya"));
    assert!(body.contains("Meera"));
    assert!(!body.contains("Rahul"));
    assert!(body.contains("Total: 2 attendees"));
    assert!(body.contains("2025-11-10"));

    let body = ctx
        .htmx_get("/admin/attendees/search?q=nobody")
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("No attendees found"));
}

#[tokio::test]
async fn test_attendee_fetch_failure_renders_notice() {
    let ctx = logged_in().await;
    ctx.api
        .fail("GET /attendees", axum::http::StatusCode::INTERNAL_SERVER_ERROR, None);

    let resp = ctx.htmx_get("/admin/panels/attendees").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Could not load attendees"));
    assert!(!body.contains("No attendees found"));

    let body = ctx.htmx_get("/admin/panels/analytics").await.text().await.unwrap();
    assert!(body.contains("Could not load attendees"));
    assert!(!body.contains("No data available"));
}

#[tokio::test]
async fn test_unparseable_created_at_keeps_attendee() {
    let ctx = logged_in().await;
    ctx.api.seed(
        Resource::Attendees,
        json!([
            {"id": "a1", "name": "Priya", "email": "priya@example.com",
             "designation": "Software Engineer", "createdAt": "2025-11-10T09:30:00Z"},
            {"id": "a2", "name": "Rahul", "email": "rahul@example.com",
             "designation": "Product Manager", "createdAt": "11/10/2025"}
        ]),
    );

    let body = ctx.htmx_get("/admin/panels/attendees").await.text().await.unwrap();
    assert!(body.contains("Rahul"));
    assert!(body.contains("Total: 2 attendees"));
    assert!(body.contains("<td>—</td>"));

    let body = ctx.htmx_get("/admin/panels/analytics").await.text().await.unwrap();
    assert!(body.contains("Product Manager"));
}

#[tokio::test]
async fn test_speaker_create_then_update() {
    let ctx = logged_in().await;

    let resp = ctx
        .htmx_post("/admin/speakers", &[("id", ""), ("name", "Ana"), ("bio", "ML")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Ana"));
    assert!(body.contains(r#"hx-swap-oob="true""#), "modal closes");
    assert_eq!(ctx.api.calls("POST /speakers"), 1);
    assert_eq!(ctx.api.calls("PUT /speakers"), 0);

    let id = ctx.api.records(Resource::Speakers)[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let modal = ctx
        .htmx_get(&format!("/admin/speakers/{id}/edit"))
        .await
        .text()
        .await
        .unwrap();
    assert!(modal.contains("Edit Speaker"));
    assert!(modal.contains(r#"value="Ana""#));

    ctx.htmx_post(
        "/admin/speakers",
        &[("id", id.as_str()), ("name", "Ana Gomez"), ("bio", "ML")],
    )
    .await;
    assert_eq!(ctx.api.calls("POST /speakers"), 1);
    assert_eq!(ctx.api.calls("PUT /speakers"), 1);
    assert_eq!(ctx.api.records(Resource::Speakers)[0]["name"], "Ana Gomez");
}

#[tokio::test]
async fn test_edit_unknown_speaker_is_not_found() {
    let ctx = logged_in().await;
    let resp = ctx.htmx_get("/admin/speakers/missing/edit").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let ctx = logged_in().await;
    ctx.api.seed(
        Resource::Sessions,
        json!([{"id": "x1", "title": "Intro"}, {"id": "x2", "title": "Deep Dive"}]),
    );

    let dialog = ctx
        .htmx_get("/admin/sessions/x1/delete")
        .await
        .text()
        .await
        .unwrap();
    assert!(dialog.contains("Are you sure you want to delete this session?"));
    assert_eq!(ctx.api.calls("DELETE /sessions"), 0);

    // Declined: nothing dispatched, collection unchanged.
    let resp = ctx.htmx_post("/admin/sessions/x1/delete", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.api.calls("DELETE /sessions"), 0);
    assert_eq!(ctx.api.records(Resource::Sessions).len(), 2);

    let resp = ctx
        .htmx_post("/admin/sessions/x1/delete", &[("confirm", "true")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.api.calls("DELETE /sessions"), 1);
    let remaining: Vec<Value> = ctx.api.records(Resource::Sessions);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], "x2");
    assert!(!resp.text().await.unwrap().contains("Intro"));
}

#[tokio::test]
async fn test_save_failure_raises_alert_without_swap() {
    let ctx = logged_in().await;
    ctx.api
        .fail("POST /speakers", axum::http::StatusCode::INTERNAL_SERVER_ERROR, None);

    let resp = ctx
        .htmx_post("/admin/speakers", &[("name", "Ana"), ("bio", "")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "HX-Reswap"), Some("none"));

    let trigger: Value = serde_json::from_str(header(&resp, "HX-Trigger").unwrap()).unwrap();
    assert_eq!(
        trigger["workshop-alert"]["value"],
        "Error saving speaker. Please try again."
    );
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_failure_raises_alert() {
    let ctx = logged_in().await;
    ctx.api.seed(Resource::Sessions, json!([{"id": "x1", "title": "Intro"}]));
    ctx.api
        .fail("DELETE /sessions", axum::http::StatusCode::BAD_GATEWAY, None);

    let resp = ctx
        .htmx_post("/admin/sessions/x1/delete", &[("confirm", "true")])
        .await;
    let trigger: Value = serde_json::from_str(header(&resp, "HX-Trigger").unwrap()).unwrap();
    assert_eq!(
        trigger["workshop-alert"]["value"],
        "Error deleting session. Please try again."
    );
    assert_eq!(ctx.api.records(Resource::Sessions).len(), 1);
}

#[tokio::test]
async fn test_session_save_sends_speaker_reference() {
    let ctx = logged_in().await;
    ctx.api.seed(Resource::Speakers, json!([{"id": "s1", "name": "Ana"}]));

    let modal = ctx.htmx_get("/admin/sessions/new").await.text().await.unwrap();
    assert!(modal.contains("Add Session"));
    assert!(modal.contains("Select a speaker"));

    let body = ctx
        .htmx_post(
            "/admin/sessions",
            &[
                ("id", ""),
                ("title", "Agents"),
                ("description", "Tool use"),
                ("date", "2025-12-06"),
                ("time", "10:30"),
                ("speakerId", "s1"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Agents"));
    assert!(body.contains("Ana"));

    let sessions = ctx.api.records(Resource::Sessions);
    assert_eq!(sessions[0]["speakerId"], "s1");
    assert_eq!(sessions[0]["date"], "2025-12-06");
}

#[tokio::test]
async fn test_session_modal_opens_without_speakers() {
    let ctx = logged_in().await;
    ctx.api.seed(
        Resource::Sessions,
        json!([{"id": "x1", "title": "Agents", "speakerId": "s1"}]),
    );
    ctx.api
        .fail("GET /speakers", axum::http::StatusCode::INTERNAL_SERVER_ERROR, None);

    let resp = ctx.htmx_get("/admin/sessions/new").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Add Session"));

    let resp = ctx.htmx_get("/admin/sessions/x1/edit").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Edit Session"));
    assert!(body.contains(r#"value="Agents""#));
}

#[tokio::test]
async fn test_analytics_counts_and_ranks() {
    let ctx = logged_in().await;
    ctx.api.seed(
        Resource::Attendees,
        json!([
            {"id": "1", "designation": "A"},
            {"id": "2", "designation": "A"},
            {"id": "3", "designation": "B"}
        ]),
    );

    let body = ctx.htmx_get("/admin/panels/analytics").await.text().await.unwrap();
    assert!(body.contains("A: 67%"));
    assert!(body.contains("B: 33%"));
    let first = body.find("#1</span>").unwrap();
    let second = body.find("#2</span>").unwrap();
    assert!(first < second);
    assert!(body[first..second].contains("2 (67%)"), "A ranks first");
    assert!(body[second..].contains("1 (33%)"));
}

#[tokio::test]
async fn test_analytics_without_attendees() {
    let ctx = logged_in().await;
    let body = ctx.htmx_get("/admin/panels/analytics").await.text().await.unwrap();
    assert!(body.contains("No data available"));
}
