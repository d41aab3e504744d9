//! Register page.

use std::sync::Arc;

use tracing::warn;

use super::PageError;
use crate::app::AppContext;
use crate::forms::RegisterForm;
use crate::net::AuthApi;
use crate::router::{LOGIN_PATH, Navigator};

pub struct RegisterPage {
    pub form: RegisterForm,
    pub on_error: bool,
    auth: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
}

impl RegisterPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            form: RegisterForm::default(),
            on_error: false,
            auth: ctx.auth.clone(),
            navigator: ctx.navigator.clone(),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    /// Create the account, then send the user to `/login`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidForm`] or [`PageError::Api`]; both set
    /// `on_error`.
    pub async fn submit(&mut self) -> Result<(), PageError> {
        let request = self.form.to_request().map_err(|errors| {
            self.on_error = true;
            PageError::InvalidForm(errors)
        })?;

        if let Err(e) = self.auth.register(&request).await {
            warn!(email = %request.email, error = %e, "register failed");
            self.on_error = true;
            return Err(e.into());
        }
        self.on_error = false;
        self.navigator.navigate(LOGIN_PATH);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::types::RegisterRequest;
    use crate::pages::doubles::{Call, Harness, MockApi};

    fn jack() -> RegisterForm {
        RegisterForm {
            email: "jacksparrow@gmail.com".into(),
            first_name: "Jack".into(),
            last_name: "Sparrow".into(),
            password: "jacksparrow".into(),
        }
    }

    #[tokio::test]
    async fn submit_registers_and_navigates_to_login() {
        let harness = Harness::new(MockApi::default());
        let mut page = RegisterPage::new(&harness.ctx);
        page.form = jack();

        page.submit().await.unwrap();

        assert_eq!(
            harness.api.calls(),
            vec![Call::Register(RegisterRequest {
                email: "jacksparrow@gmail.com".into(),
                first_name: "Jack".into(),
                last_name: "Sparrow".into(),
                password: "jacksparrow".into(),
            })]
        );
        assert_eq!(harness.history.current(), "/login");
        assert!(!page.on_error);
        assert!(!harness.ctx.session.is_logged_in());
    }

    #[tokio::test]
    async fn api_failure_sets_on_error() {
        let harness = Harness::new(MockApi { fail_status: Some(400), ..MockApi::default() });
        let mut page = RegisterPage::new(&harness.ctx);
        page.form = jack();

        let err = page.submit().await.unwrap_err();

        assert!(matches!(err, PageError::Api(ref api) if api.status() == 400));
        assert!(page.on_error);
        assert_eq!(harness.history.entries(), vec!["/".to_owned()]);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_api() {
        let harness = Harness::new(MockApi::default());
        let mut page = RegisterPage::new(&harness.ctx);
        page.form = RegisterForm { email: "abdourrahmanfakhsi".into(), ..jack() };
        assert!(!page.can_submit());

        assert!(matches!(page.submit().await, Err(PageError::InvalidForm(_))));
        assert!(page.on_error);
        assert!(harness.api.calls().is_empty());
    }
}
