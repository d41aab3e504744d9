//! Login form model.

use super::rules::{FormErrors, Rule};
use crate::net::types::LoginRequest;

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(3)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors
            .field("email", &self.email, EMAIL_RULES)
            .field("password", &self.password, PASSWORD_RULES);
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// The request body, or the validation failures.
    ///
    /// # Errors
    ///
    /// Returns the form's [`FormErrors`] when any field is invalid.
    pub fn to_request(&self) -> Result<LoginRequest, FormErrors> {
        let errors = self.validate();
        if !errors.is_valid() {
            return Err(errors);
        }
        Ok(LoginRequest { email: self.email.clone(), password: self.password.clone() })
    }
}
