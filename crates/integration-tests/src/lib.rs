//! Integration tests for the workshop site.
//!
//! Every test starts its own stub of the workshop REST API and its own site
//! instance, both on ephemeral ports, and drives the site over HTTP with a
//! cookie-keeping client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p workshop-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn test_health() {
//!     let ctx = TestContext::new().await;
//!     let resp = ctx.get("/health").await;
//!     assert_eq!(resp.status(), 200);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test support: panicking on setup failure is the intended behavior.
#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post, put},
};
use reqwest::Client;
use serde_json::{Value, json};
use workshop_site::config::{ApiConfig, SiteConfig};
use workshop_site::state::AppState;

/// Password the stub accepts for `POST /admin/login`.
pub const ADMIN_PASSWORD: &str = "workshop-admin";

/// Timestamp the stub stamps on new attendees.
pub const CREATED_AT: &str = "2025-11-10T09:30:00Z";

/// Collections served by the stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Attendees,
    Speakers,
    Sessions,
}

impl Resource {
    /// Path segment under `/api`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attendees => "attendees",
            Self::Speakers => "speakers",
            Self::Sessions => "sessions",
        }
    }
}

#[derive(Default)]
struct StubInner {
    records: Mutex<HashMap<Resource, Vec<Value>>>,
    /// Bodies served instead of the records, e.g. `null`.
    raw: Mutex<HashMap<Resource, Value>>,
    /// Calls per `"METHOD /resource"` key.
    calls: Mutex<HashMap<String, usize>>,
    /// Injected failures per `"METHOD /resource"` key.
    failures: Mutex<HashMap<String, (StatusCode, Option<String>)>>,
    next_id: AtomicUsize,
}

/// In-memory stand-in for the workshop REST API.
///
/// Call keys are `"METHOD /resource"`, with item routes keyed by their
/// collection: `"PUT /speakers"`, `"DELETE /sessions"`, `"GET /attendees/count"`,
/// `"POST /admin/login"`.
#[derive(Clone, Default)]
pub struct StubApi {
    inner: Arc<StubInner>,
}

impl StubApi {
    /// Serve a fresh stub on an ephemeral port and return it with its
    /// base URL (`http://127.0.0.1:{port}/api`).
    pub async fn spawn() -> (Self, String) {
        let stub = Self::default();

        let app = Router::new()
            .route("/api/attendees", collection(Resource::Attendees))
            .route("/api/attendees/count", get(attendee_count))
            .route("/api/speakers", collection(Resource::Speakers))
            .route("/api/speakers/{id}", item(Resource::Speakers))
            .route("/api/sessions", collection(Resource::Sessions))
            .route("/api/sessions/{id}", item(Resource::Sessions))
            .route("/api/admin/login", post(admin_login))
            .with_state(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub API");
        let addr = listener.local_addr().expect("Stub API has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub API stopped");
        });

        (stub, format!("http://{addr}/api"))
    }

    /// Replace a collection.
    pub fn seed(&self, resource: Resource, records: Value) {
        let records = match records {
            Value::Array(records) => records,
            other => panic!("seed expects an array, got {other}"),
        };
        lock(&self.inner.records).insert(resource, records);
    }

    /// Current contents of a collection.
    #[must_use]
    pub fn records(&self, resource: Resource) -> Vec<Value> {
        lock(&self.inner.records)
            .get(&resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Serve `body` for `GET /resource` instead of the records.
    pub fn respond_raw(&self, resource: Resource, body: Value) {
        lock(&self.inner.raw).insert(resource, body);
    }

    /// Make every call to `key` fail with `status` and an optional
    /// `{"error": message}` body.
    pub fn fail(&self, key: &str, status: StatusCode, message: Option<&str>) {
        lock(&self.inner.failures).insert(key.to_string(), (status, message.map(String::from)));
    }

    /// Number of calls made to `key`.
    #[must_use]
    pub fn calls(&self, key: &str) -> usize {
        lock(&self.inner.calls).get(key).copied().unwrap_or(0)
    }

    /// Record a call and return the injected failure, if any.
    fn enter(&self, key: &str) -> Result<(), Response> {
        *lock(&self.inner.calls).entry(key.to_string()).or_default() += 1;

        match lock(&self.inner.failures).get(key).cloned() {
            Some((status, message)) => {
                let body = message.map_or_else(|| json!({}), |message| json!({ "error": message }));
                Err((status, Json(body)).into_response())
            }
            None => Ok(()),
        }
    }

    fn list(&self, resource: Resource) -> Response {
        if let Err(failure) = self.enter(&format!("GET /{}", resource.name())) {
            return failure;
        }
        if let Some(body) = lock(&self.inner.raw).get(&resource).cloned() {
            return Json(body).into_response();
        }
        Json(Value::Array(self.records(resource))).into_response()
    }

    fn create(&self, resource: Resource, mut body: Value) -> Response {
        if let Err(failure) = self.enter(&format!("POST /{}", resource.name())) {
            return failure;
        }
        let id = format!(
            "{}-{}",
            resource.name(),
            self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
        );
        if let Some(fields) = body.as_object_mut() {
            fields.insert("id".to_string(), json!(id));
            if resource == Resource::Attendees {
                fields.insert("createdAt".to_string(), json!(CREATED_AT));
            }
        }
        lock(&self.inner.records)
            .entry(resource)
            .or_default()
            .push(body);
        (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
    }

    fn update(&self, resource: Resource, id: &str, body: Value) -> Response {
        if let Err(failure) = self.enter(&format!("PUT /{}", resource.name())) {
            return failure;
        }
        let mut records = lock(&self.inner.records);
        let Some(record) = records
            .entry(resource)
            .or_default()
            .iter_mut()
            .find(|record| record["id"] == id)
        else {
            return not_found();
        };
        if let (Some(fields), Some(updates)) = (record.as_object_mut(), body.as_object()) {
            for (key, value) in updates {
                fields.insert(key.clone(), value.clone());
            }
        }
        Json(record.clone()).into_response()
    }

    fn delete(&self, resource: Resource, id: &str) -> Response {
        if let Err(failure) = self.enter(&format!("DELETE /{}", resource.name())) {
            return failure;
        }
        let mut records = lock(&self.inner.records);
        let collection = records.entry(resource).or_default();
        let before = collection.len();
        collection.retain(|record| record["id"] != id);
        if collection.len() == before {
            return not_found();
        }
        StatusCode::NO_CONTENT.into_response()
    }
}

fn collection(resource: Resource) -> MethodRouter<StubApi> {
    get(move |State(stub): State<StubApi>| async move { stub.list(resource) }).post(
        move |State(stub): State<StubApi>, Json(body): Json<Value>| async move {
            stub.create(resource, body)
        },
    )
}

fn item(resource: Resource) -> MethodRouter<StubApi> {
    put(
        move |State(stub): State<StubApi>, Path(id): Path<String>, Json(body): Json<Value>| async move {
            stub.update(resource, &id, body)
        },
    )
    .delete(
        move |State(stub): State<StubApi>, Path(id): Path<String>| async move {
            stub.delete(resource, &id)
        },
    )
}

async fn attendee_count(State(stub): State<StubApi>) -> Response {
    if let Err(failure) = stub.enter("GET /attendees/count") {
        return failure;
    }
    let count = stub.records(Resource::Attendees).len();
    Json(json!({ "count": count })).into_response()
}

async fn admin_login(State(stub): State<StubApi>, Json(body): Json<Value>) -> Response {
    if let Err(failure) = stub.enter("POST /admin/login") {
        return failure;
    }
    if body["password"] == ADMIN_PASSWORD {
        Json(json!({ "success": true })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid password" })),
        )
            .into_response()
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("Stub state lock poisoned")
}

/// A running site wired to its own [`StubApi`].
pub struct TestContext {
    pub api: StubApi,
    /// Stub API base URL, e.g. `http://127.0.0.1:40122/api`.
    pub api_url: String,
    /// Cookie-keeping client that does not follow redirects.
    pub client: Client,
    /// Site base URL, e.g. `http://127.0.0.1:40123`.
    pub base_url: String,
}

impl TestContext {
    /// Start a stub API and a site pointed at it.
    pub async fn new() -> Self {
        let (api, api_url) = StubApi::spawn().await;

        let api_config = ApiConfig::new(&api_url).expect("Stub API URL is valid");
        let state =
            AppState::new(SiteConfig::local(api_config)).expect("Failed to create site state");
        let app = workshop_site::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind site");
        let addr = listener.local_addr().expect("Site has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Site stopped");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api,
            api_url,
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a site path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Plain browser GET.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET as issued by HTMX.
    pub async fn htmx_get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("HTMX GET request failed")
    }

    /// Form POST as issued by HTMX.
    pub async fn htmx_post(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("HTMX POST request failed")
    }

    /// Log in with `password` through the login form.
    pub async fn login_with(&self, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/admin/login"))
            .form(&[("password", password)])
            .send()
            .await
            .expect("Login request failed")
    }

    /// Log in with the password the stub accepts.
    pub async fn login(&self) -> reqwest::Response {
        let resp = self.login_with(ADMIN_PASSWORD).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login should redirect");
        resp
    }
}

/// Response header as a string, if present.
#[must_use]
pub fn header<'a>(resp: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|value| value.to_str().ok())
}
