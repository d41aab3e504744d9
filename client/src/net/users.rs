//! Account endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::api::{ApiClient, ApiError, decode};
use super::types::User;

pub(crate) fn user_endpoint(user_id: u64) -> String {
    format!("api/user/{user_id}")
}

#[async_trait]
pub trait UserApi: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 for an unknown id.
    async fn get_by_id(&self, user_id: u64) -> Result<User, ApiError>;

    /// Delete an account. The API only lets users delete themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 401 when deleting someone else.
    async fn delete(&self, user_id: u64) -> Result<(), ApiError>;
}

#[async_trait]
impl UserApi for ApiClient {
    async fn get_by_id(&self, user_id: u64) -> Result<User, ApiError> {
        let body = self.send_empty(Method::GET, &user_endpoint(user_id)).await?;
        decode(&body)
    }

    async fn delete(&self, user_id: u64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &user_endpoint(user_id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_endpoint_formats_expected_path() {
        assert_eq!(user_endpoint(8), "api/user/8");
    }
}
