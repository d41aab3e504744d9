//! HTTP plumbing shared by every studio API group.
//!
//! DESIGN
//! ======
//! `ApiClient` owns one `reqwest::Client` and resolves relative `api/...`
//! paths against the configured base URL. When bound to a [`SessionState`] it
//! acts as the bearer interceptor: each request reads the current token at
//! send time, so a login or logout between calls takes effect immediately.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies keep their status and body text so callers can tell a 404
//! from a 409. Transport failures carry no status and report `0`, matching
//! how the browser surfaces a dropped connection.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::config::ApiConfig;
use crate::state::session::SessionState;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (refused, reset, timed out).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// A success reply whose body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed call, `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            _ => 0,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// REST client for the studio API. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<SessionState>,
}

impl ApiClient {
    /// Build a client without a bound session; requests carry no credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url, session: None })
    }

    /// Attach the login state so authenticated requests carry its token.
    #[must_use]
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}{path}: {e}", self.base_url)))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let mut builder = self.http.request(method, self.url(path)?);
        if let Some(token) = self.session.as_ref().and_then(SessionState::token) {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "api request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(%method, path, status = status.as_u16(), "api request");

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        Ok(body)
    }

    /// Send a request without a body and return the raw reply text.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<String, ApiError> {
        let builder = self.request(method.clone(), path)?;
        self.send(method, path, builder).await
    }

    /// Send `body` as JSON and return the raw reply text.
    pub(crate) async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let builder = self.request(method.clone(), path)?.json(body);
        self.send(method, path, builder).await
    }
}

/// Decode a JSON reply body.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
