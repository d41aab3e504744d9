//! Form models and their validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own one form each; the UI layer writes field values into it and
//! asks for `validate()` to decide whether submit is enabled.

pub mod login;
pub mod register;
pub mod rules;
pub mod session;

pub use login::LoginForm;
pub use register::RegisterForm;
pub use rules::{FieldError, FormErrors, Rule};
pub use session::SessionForm;
