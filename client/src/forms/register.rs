//! Registration form model.

use super::rules::{FormErrors, Rule};
use crate::net::types::RegisterRequest;

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(20)];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(40)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors
            .field("email", &self.email, EMAIL_RULES)
            .field("firstName", &self.first_name, NAME_RULES)
            .field("lastName", &self.last_name, NAME_RULES)
            .field("password", &self.password, PASSWORD_RULES);
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// # Errors
    ///
    /// Returns the form's [`FormErrors`] when any field is invalid.
    pub fn to_request(&self) -> Result<RegisterRequest, FormErrors> {
        let errors = self.validate();
        if !errors.is_valid() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
        })
    }
}
