//! Account page (`/me`): the logged-in user's profile and self-deletion.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use std::sync::Arc;

use tracing::info;

use super::PageError;
use crate::app::AppContext;
use crate::net::UserApi;
use crate::net::types::User;
use crate::router::Navigator;
use crate::state::session::SessionState;
use crate::util::date::long_date;
use crate::util::snackbar::{CLOSE_ACTION, NOTICE_DURATION, Notifier};

pub const TITLE: &str = "User information";
pub const DELETED_NOTICE: &str = "Your account has been deleted !";

pub struct AccountPage {
    pub user: Option<User>,
    users: Arc<dyn UserApi>,
    session: SessionState,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl AccountPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            user: None,
            users: ctx.users.clone(),
            session: ctx.session.clone(),
            navigator: ctx.navigator.clone(),
            notifier: ctx.notifier.clone(),
        }
    }

    fn user_id(&self) -> Result<u64, PageError> {
        self.session.user_id().ok_or(PageError::NotLoggedIn)
    }

    /// Load the logged-in user's record.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NotLoggedIn`] or the API failure; `user` is left
    /// unchanged either way.
    pub async fn init(&mut self) -> Result<(), PageError> {
        let id = self.user_id()?;
        self.user = Some(self.users.get_by_id(id).await?);
        Ok(())
    }

    pub fn back(&self) {
        self.navigator.back();
    }

    /// Delete the account, then log out and return to `/`.
    ///
    /// # Errors
    ///
    /// On API failure nothing else happens: no notice, no logout.
    pub async fn delete(&mut self) -> Result<(), PageError> {
        let id = self.user_id()?;
        self.users.delete(id).await?;
        info!(user_id = id, "account deleted");
        self.notifier.open(DELETED_NOTICE, CLOSE_ACTION, NOTICE_DURATION);
        self.session.log_out();
        self.navigator.navigate("/");
        Ok(())
    }

    /// Only regular users may delete their own account.
    pub fn can_delete(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.admin)
    }

    /// Text lines the screen shows, top to bottom. Empty until loaded.
    pub fn lines(&self) -> Vec<String> {
        let Some(user) = &self.user else {
            return Vec::new();
        };
        let mut lines = vec![
            TITLE.to_owned(),
            format!("Name: {} {}", user.first_name, user.last_name.to_uppercase()),
            format!("Email: {}", user.email),
        ];
        lines.push(if user.admin { "You are admin".to_owned() } else { "Delete my account:".to_owned() });
        if let Some(created) = user.created_at.as_deref().and_then(long_date) {
            lines.push(format!("Create at: {created}"));
        }
        if let Some(updated) = user.updated_at.as_deref().and_then(long_date) {
            lines.push(format!("Last update: {updated}"));
        }
        lines
    }
}
