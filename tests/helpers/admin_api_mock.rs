//! Mock admin API server for testing
//!
//! This module provides a mock HTTP server that simulates the storefront admin
//! REST API for testing purposes. It uses wiremock to create configurable mock
//! responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

use storefront_admin::{
    config::Settings,
    models::EntityKind,
    services::{AdminApiClient, RecordingNavigator, SubmissionController},
};

/// Mock admin API server
pub struct AdminApiMock {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            body: None,
        }
    }
}

impl MockResponseConfig {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, delay_ms: None, body: Some(body) }
    }

    pub fn created(body: Value) -> Self {
        Self { status: 201, delay_ms: None, body: Some(body) }
    }

    pub fn error(status: u16, body: Value) -> Self {
        Self { status, delay_ms: None, body: Some(body) }
    }

    fn template(&self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status);
        if let Some(body) = &self.body {
            response = response.set_body_json(body);
        }
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }
}

impl AdminApiMock {
    /// Start a new mock admin API server
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Settings pointing at this mock server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.uri();
        settings.api.timeout_seconds = 2;
        settings
    }

    pub fn client(&self) -> AdminApiClient {
        AdminApiClient::new(&self.settings().api).expect("mock client")
    }

    /// Controller wired to this server with a recording navigator
    pub fn controller(&self) -> (SubmissionController<RecordingNavigator>, RecordingNavigator) {
        let navigator = RecordingNavigator::new();
        (SubmissionController::new(self.client(), navigator.clone()), navigator)
    }

    /// Mock `POST /api/<collection>`
    pub async fn mock_create(&self, kind: EntityKind, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(kind.endpoint()))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Mock `POST /api/<collection>` assigning a fresh id to every request,
    /// echoing the submitted form fields back
    pub async fn mock_create_assigning_ids(&self, kind: EntityKind, id_prefix: &'static str) {
        let counter = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        Mock::given(method("POST"))
            .and(path(kind.endpoint()))
            .respond_with(move |request: &Request| {
                let n = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
                let mut body: Value = serde_json::from_slice(&request.body).unwrap_or_else(|_| json!({}));
                body["id"] = json!(format!("{}{}", id_prefix, n));
                body["created_at"] = json!("2024-05-01T12:00:00Z");
                body["updated_at"] = json!("2024-05-01T12:00:00Z");
                ResponseTemplate::new(201).set_body_json(body)
            })
            .mount(&self.server)
            .await;
    }

    /// Mock `PUT /api/<collection>/<id>`
    pub async fn mock_update(&self, kind: EntityKind, id: &str, config: MockResponseConfig) {
        Mock::given(method("PUT"))
            .and(path(format!("{}/{}", kind.endpoint(), id)))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Mock `GET /api/<collection>/<id>`
    pub async fn mock_fetch(&self, kind: EntityKind, id: &str, config: MockResponseConfig) {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", kind.endpoint(), id)))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Mock `GET /api/<collection>`
    pub async fn mock_list(&self, kind: EntityKind, config: MockResponseConfig) {
        Mock::given(method("GET"))
            .and(path(kind.endpoint()))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Mock `DELETE /api/<collection>/<id>`
    pub async fn mock_delete(&self, kind: EntityKind, id: &str, config: MockResponseConfig) {
        Mock::given(method("DELETE"))
            .and(path(format!("{}/{}", kind.endpoint(), id)))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Number of requests received with the given method
    pub async fn request_count(&self, http_method: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.method.as_str() == http_method)
            .count()
    }

    /// JSON bodies of all requests received so far
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

/// Settings pointing at a local port nothing listens on, for network failure tests
pub fn unreachable_settings() -> Settings {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let mut settings = Settings::default();
    settings.api.base_url = format!("http://{}", addr);
    settings.api.timeout_seconds = 2;
    settings
}
