//! Create and update screen for yoga sessions (admins only).

#[cfg(test)]
#[path = "session_form_test.rs"]
mod session_form_test;

use std::sync::Arc;

use tracing::{debug, info};

use super::PageError;
use crate::app::AppContext;
use crate::forms::SessionForm;
use crate::net::types::Teacher;
use crate::net::{SessionApi, TeacherApi};
use crate::router::{Navigator, Route};
use crate::state::session::SessionState;
use crate::util::snackbar::{CLOSE_ACTION, NOTICE_DURATION, Notifier};

pub const CREATED_NOTICE: &str = "Session created !";
pub const UPDATED_NOTICE: &str = "Session updated !";

pub struct SessionFormPage {
    pub form: SessionForm,
    pub teachers: Vec<Teacher>,
    pub on_update: bool,
    session_id: Option<u64>,
    sessions: Arc<dyn SessionApi>,
    teacher_api: Arc<dyn TeacherApi>,
    session: SessionState,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl SessionFormPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            form: SessionForm::default(),
            teachers: Vec::new(),
            on_update: false,
            session_id: None,
            sessions: ctx.sessions.clone(),
            teacher_api: ctx.teachers.clone(),
            session: ctx.session.clone(),
            navigator: ctx.navigator.clone(),
            notifier: ctx.notifier.clone(),
        }
    }

    /// Prepare the form for the route at `path`.
    ///
    /// Non-admins are sent to `sessions` and nothing is loaded. On
    /// `/sessions/update/{id}` the form is prefilled from the stored session;
    /// any other path starts empty.
    ///
    /// # Errors
    ///
    /// Returns the first API failure.
    pub async fn init(&mut self, path: &str) -> Result<(), PageError> {
        if !self.session.is_admin() {
            debug!("non-admin on session form");
            self.navigator.navigate("sessions");
            return Ok(());
        }

        self.teachers = self.teacher_api.all().await?;

        if let Some(Route::SessionUpdate(id)) = Route::parse(path) {
            self.on_update = true;
            self.session_id = Some(id);
            let session = self.sessions.detail(id).await?;
            self.form = SessionForm::from_session(&session);
        } else {
            self.on_update = false;
            self.session_id = None;
            self.form = SessionForm::default();
        }
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    /// Create or update, notify, then return to `sessions`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidForm`] without a request, or the API
    /// failure with no notice and no navigation.
    pub async fn submit(&mut self) -> Result<(), PageError> {
        let draft = self.form.to_draft().map_err(PageError::InvalidForm)?;

        let notice = match self.session_id.filter(|_| self.on_update) {
            Some(id) => {
                self.sessions.update(id, &draft).await?;
                info!(session_id = id, "session updated");
                UPDATED_NOTICE
            }
            None => {
                let created = self.sessions.create(&draft).await?;
                info!(session_id = ?created.id, "session created");
                CREATED_NOTICE
            }
        };
        self.notifier.open(notice, CLOSE_ACTION, NOTICE_DURATION);
        self.navigator.navigate("sessions");
        Ok(())
    }
}
