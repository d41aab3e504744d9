//! API client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use super::api::ApiError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root the `api/...` paths are resolved against. Always ends with `/`.
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `YOGA_API_BASE_URL`: default `http://localhost:8080/`
    /// - `YOGA_API_TIMEOUT_SECS`: default 30
    /// - `YOGA_API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when a value is present but malformed.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(env_var)
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("YOGA_API_BASE_URL") {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let request_secs = parse_secs("YOGA_API_TIMEOUT_SECS", lookup("YOGA_API_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let connect_secs = parse_secs(
            "YOGA_API_CONNECT_TIMEOUT_SECS",
            lookup("YOGA_API_CONNECT_TIMEOUT_SECS"),
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(request_secs),
            connect_timeout: Duration::from_secs(connect_secs),
        })
    }

    /// Replace the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] for non-HTTP URLs.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ApiError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Trim `raw`, require an `http`/`https` scheme, and make sure it ends with
/// `/` so relative API paths resolve below it.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBaseUrl`] for empty or non-HTTP input.
pub fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(trimmed.to_owned()));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Ok(format!("{trimmed}/"))
    }
}

fn parse_secs(key: &str, raw: Option<String>, default: u64) -> Result<u64, ApiError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ApiError::Config(format!("{key} must be a positive integer, got {raw:?}"))),
        Ok(secs) => Ok(secs),
    }
}
