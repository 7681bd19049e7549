//! Admin REST API client
//!
//! This client is the only boundary between the dashboard and the backend.
//! It handles HTTP client setup, endpoint construction, error payload parsing
//! and mapping of transport/status failures into [`AdminError`].

use std::time::Duration;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;
use url::Url;
use crate::config::ApiConfig;
use crate::models::{EntityKind, ManagedEntity};
use crate::utils::errors::{AdminError, Result};

/// Error payload returned by the backend on non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub message: Option<String>,
}

/// Extract a usable server message from a raw error body
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.message)
        .filter(|message| !message.trim().is_empty())
}

/// HTTP client for the admin REST API
#[derive(Clone, Debug)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl AdminApiClient {
    /// Create a new client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // Reject malformed base URLs up front rather than on the first request
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(AdminError::NetworkFailure)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of a collection or of one member of it
    pub fn endpoint(&self, kind: EntityKind, id: Option<&str>) -> Result<Url> {
        let url = match id {
            Some(id) => format!("{}{}/{}", self.base_url, kind.endpoint(), urlencoding::encode(id)),
            None => format!("{}{}", self.base_url, kind.endpoint()),
        };
        Ok(Url::parse(&url)?)
    }

    /// Create an entity: `POST /api/<collection>`
    pub async fn create<E: ManagedEntity>(&self, form: &E::FormData) -> Result<E> {
        let url = self.endpoint(E::KIND, None)?;
        debug!(entity = %E::KIND, url = %url, "Creating entity");

        let request = self.client.post(url).json(form);
        self.send_json(request, E::KIND, None).await
    }

    /// Update an entity: `PUT /api/<collection>/<id>`
    pub async fn update<E: ManagedEntity>(&self, id: &str, form: &E::FormData) -> Result<E> {
        let url = self.endpoint(E::KIND, Some(id))?;
        debug!(entity = %E::KIND, id = id, url = %url, "Updating entity");

        let request = self.client.put(url).json(form);
        self.send_json(request, E::KIND, Some(id)).await
    }

    /// Fetch one entity: `GET /api/<collection>/<id>`
    pub async fn fetch<E: ManagedEntity>(&self, id: &str) -> Result<E> {
        let url = self.endpoint(E::KIND, Some(id))?;
        debug!(entity = %E::KIND, id = id, url = %url, "Fetching entity");

        let request = self.client.get(url);
        self.send_json(request, E::KIND, Some(id)).await
    }

    /// List a collection: `GET /api/<collection>`
    pub async fn list<E: ManagedEntity>(&self) -> Result<Vec<E>> {
        let url = self.endpoint(E::KIND, None)?;
        debug!(entity = %E::KIND, url = %url, "Listing entities");

        let request = self.client.get(url);
        self.send_json(request, E::KIND, None).await
    }

    /// Delete an entity: `DELETE /api/<collection>/<id>`
    pub async fn delete<E: ManagedEntity>(&self, id: &str) -> Result<()> {
        let url = self.endpoint(E::KIND, Some(id))?;
        debug!(entity = %E::KIND, id = id, url = %url, "Deleting entity");

        let response = self.authorize(self.client.delete(url))
            .send()
            .await
            .map_err(AdminError::NetworkFailure)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body, E::KIND, Some(id)));
        }

        Ok(())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON success body
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        kind: EntityKind,
        id: Option<&str>,
    ) -> Result<T> {
        let response = self.authorize(request)
            .send()
            .await
            .map_err(AdminError::NetworkFailure)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body, kind, id));
        }

        let bytes = response.bytes().await.map_err(AdminError::NetworkFailure)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| AdminError::InvalidResponse(format!("{} response: {}", kind, e)))
    }
}

/// Map a non-success status to the error taxonomy.
///
/// 404 on a member URL means the entity does not exist; everything else is a
/// failed request carrying the server message when one was sent.
fn status_error(status: StatusCode, body: &str, kind: EntityKind, id: Option<&str>) -> AdminError {
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return AdminError::NotFound { entity: kind, id: id.to_string() };
        }
    }

    AdminError::RequestFailed {
        status: status.as_u16(),
        message: extract_error_message(body),
    }
}
