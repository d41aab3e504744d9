//! Yoga session endpoints: CRUD plus participation.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use async_trait::async_trait;
use reqwest::Method;

use super::api::{ApiClient, ApiError, decode};
use super::types::{Session, SessionDraft};

pub const SESSIONS_PATH: &str = "api/session";

pub(crate) fn session_endpoint(session_id: u64) -> String {
    format!("{SESSIONS_PATH}/{session_id}")
}

pub(crate) fn participate_endpoint(session_id: u64, user_id: u64) -> String {
    format!("{SESSIONS_PATH}/{session_id}/participate/{user_id}")
}

#[async_trait]
pub trait SessionApi: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the reply does not decode.
    async fn all(&self) -> Result<Vec<Session>, ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 for an unknown id.
    async fn detail(&self, session_id: u64) -> Result<Session, ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 400 when the draft is rejected.
    async fn create(&self, draft: &SessionDraft) -> Result<Session, ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 for an unknown id.
    async fn update(&self, session_id: u64, draft: &SessionDraft) -> Result<Session, ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 for an unknown id.
    async fn delete(&self, session_id: u64) -> Result<(), ApiError>;

    /// Sign `user_id` up for the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 409 when already signed up, 404 for
    /// an unknown session.
    async fn participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError>;

    /// Cancel the participation of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 when not signed up or the session
    /// is unknown.
    async fn un_participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError>;
}

#[async_trait]
impl SessionApi for ApiClient {
    async fn all(&self) -> Result<Vec<Session>, ApiError> {
        let body = self.send_empty(Method::GET, SESSIONS_PATH).await?;
        decode(&body)
    }

    async fn detail(&self, session_id: u64) -> Result<Session, ApiError> {
        let body = self.send_empty(Method::GET, &session_endpoint(session_id)).await?;
        decode(&body)
    }

    async fn create(&self, draft: &SessionDraft) -> Result<Session, ApiError> {
        let body = self.send_json(Method::POST, SESSIONS_PATH, draft).await?;
        decode(&body)
    }

    async fn update(&self, session_id: u64, draft: &SessionDraft) -> Result<Session, ApiError> {
        let body = self.send_json(Method::PUT, &session_endpoint(session_id), draft).await?;
        decode(&body)
    }

    async fn delete(&self, session_id: u64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &session_endpoint(session_id)).await?;
        Ok(())
    }

    async fn participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.send_empty(Method::POST, &participate_endpoint(session_id, user_id)).await?;
        Ok(())
    }

    async fn un_participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &participate_endpoint(session_id, user_id)).await?;
        Ok(())
    }
}
