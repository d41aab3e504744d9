//! Teacher endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::api::{ApiClient, ApiError, decode};
use super::types::Teacher;

pub const TEACHERS_PATH: &str = "api/teacher";

#[async_trait]
pub trait TeacherApi: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the reply does not decode.
    async fn all(&self) -> Result<Vec<Teacher>, ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 for an unknown id.
    async fn detail(&self, teacher_id: u64) -> Result<Teacher, ApiError>;
}

#[async_trait]
impl TeacherApi for ApiClient {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError> {
        let body = self.send_empty(Method::GET, TEACHERS_PATH).await?;
        decode(&body)
    }

    async fn detail(&self, teacher_id: u64) -> Result<Teacher, ApiError> {
        let body = self.send_empty(Method::GET, &format!("{TEACHERS_PATH}/{teacher_id}")).await?;
        decode(&body)
    }
}
