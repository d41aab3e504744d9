//! Networking modules for the studio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and error type, `config` loads its settings,
//! `types` defines the wire schema, and one module per resource group
//! (`auth`, `sessions`, `users`, `teachers`) exposes a trait seam plus its
//! `ApiClient` implementation.

pub mod api;
pub mod auth;
pub mod config;
pub mod sessions;
pub mod teachers;
pub mod types;
pub mod users;

pub use api::{ApiClient, ApiError};
pub use auth::AuthApi;
pub use config::ApiConfig;
pub use sessions::SessionApi;
pub use teachers::TeacherApi;
pub use users::UserApi;
