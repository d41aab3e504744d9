//! Login page: credentials in, session record into the login state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use tracing::warn;

use super::PageError;
use crate::app::AppContext;
use crate::forms::LoginForm;
use crate::net::AuthApi;
use crate::router::{Navigator, SESSIONS_PATH};
use crate::state::session::SessionState;

pub struct LoginPage {
    pub form: LoginForm,
    /// Shown as "An error occurred" under the form.
    pub on_error: bool,
    auth: Arc<dyn AuthApi>,
    session: SessionState,
    navigator: Arc<dyn Navigator>,
}

impl LoginPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            form: LoginForm::default(),
            on_error: false,
            auth: ctx.auth.clone(),
            session: ctx.session.clone(),
            navigator: ctx.navigator.clone(),
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    /// Log in with the form's credentials.
    ///
    /// On success the reply goes to the login state unchanged and the user
    /// lands on `/sessions`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidForm`] without a request for an invalid
    /// form, or [`PageError::Api`] when the API refuses. Both set `on_error`.
    pub async fn submit(&mut self) -> Result<(), PageError> {
        let request = self.form.to_request().map_err(|errors| {
            self.on_error = true;
            PageError::InvalidForm(errors)
        })?;

        match self.auth.login(&request).await {
            Ok(information) => {
                self.session.log_in(information);
                self.navigator.navigate(SESSIONS_PATH);
                self.on_error = false;
                Ok(())
            }
            Err(e) => {
                warn!(email = %request.email, error = %e, "login failed");
                self.on_error = true;
                Err(e.into())
            }
        }
    }
}
