//! Authentication endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::api::{ApiClient, ApiError, decode};
use super::types::{LoginRequest, RegisterRequest, SessionInformation};

pub const LOGIN_PATH: &str = "api/auth/login";
pub const REGISTER_PATH: &str = "api/auth/register";

/// Credential exchange with the API. Enables test doubles for pages.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 401 for bad credentials.
    async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError>;

    /// Create an account. The reply body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 400 when the e-mail is taken or a
    /// field is rejected.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError> {
        let body = self.send_json(Method::POST, LOGIN_PATH, request).await?;
        decode(&body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_json(Method::POST, REGISTER_PATH, request).await?;
        Ok(())
    }
}
