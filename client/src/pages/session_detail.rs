//! Session detail page (`/sessions/detail/{id}`).
//!
//! DESIGN
//! ======
//! The page is bound to one session id and one user id at construction. Every
//! participation change re-fetches the session rather than patching the
//! local copy, so `is_participate` and the attendee count always reflect the
//! server.

#[cfg(test)]
#[path = "session_detail_test.rs"]
mod session_detail_test;

use std::sync::Arc;

use tracing::info;

use super::PageError;
use crate::app::AppContext;
use crate::net::types::{Session, Teacher};
use crate::net::{SessionApi, TeacherApi};
use crate::router::Navigator;
use crate::util::snackbar::{CLOSE_ACTION, NOTICE_DURATION, Notifier};

pub const DELETED_NOTICE: &str = "Session deleted !";

pub struct SessionDetailPage {
    pub session_id: u64,
    pub user_id: u64,
    pub is_admin: bool,
    pub session: Option<Session>,
    pub teacher: Option<Teacher>,
    pub is_participate: bool,
    sessions: Arc<dyn SessionApi>,
    teachers: Arc<dyn TeacherApi>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl SessionDetailPage {
    /// # Errors
    ///
    /// Returns [`PageError::NotLoggedIn`] when the login state is empty.
    pub fn new(ctx: &AppContext, session_id: u64) -> Result<Self, PageError> {
        let user = ctx.session.session_information().ok_or(PageError::NotLoggedIn)?;
        Ok(Self {
            session_id,
            user_id: user.id,
            is_admin: user.admin,
            session: None,
            teacher: None,
            is_participate: false,
            sessions: ctx.sessions.clone(),
            teachers: ctx.teachers.clone(),
            navigator: ctx.navigator.clone(),
            notifier: ctx.notifier.clone(),
        })
    }

    /// Load the session, then its teacher.
    ///
    /// # Errors
    ///
    /// Returns the first API failure. A failed teacher lookup leaves the
    /// freshly loaded session in place.
    pub async fn init(&mut self) -> Result<(), PageError> {
        let teacher_id = self.fetch_session().await?;
        self.teacher = Some(self.teachers.detail(teacher_id).await?);
        Ok(())
    }

    async fn fetch_session(&mut self) -> Result<u64, PageError> {
        let session = self.sessions.detail(self.session_id).await?;
        self.is_participate = session.has_participant(self.user_id);
        let teacher_id = session.teacher_id;
        self.session = Some(session);
        Ok(teacher_id)
    }

    pub fn back(&self) {
        self.navigator.back();
    }

    /// # Errors
    ///
    /// Returns the API failure; no notice and no navigation happen then.
    pub async fn delete(&mut self) -> Result<(), PageError> {
        self.sessions.delete(self.session_id).await?;
        info!(session_id = self.session_id, "session deleted");
        self.notifier.open(DELETED_NOTICE, CLOSE_ACTION, NOTICE_DURATION);
        self.navigator.navigate("sessions");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the API failure without re-fetching.
    pub async fn participate(&mut self) -> Result<(), PageError> {
        self.sessions.participate(self.session_id, self.user_id).await?;
        self.fetch_session().await.map(drop)
    }

    /// # Errors
    ///
    /// Returns the API failure without re-fetching.
    pub async fn un_participate(&mut self) -> Result<(), PageError> {
        self.sessions.un_participate(self.session_id, self.user_id).await?;
        self.fetch_session().await.map(drop)
    }

    pub fn attendees(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.users.len())
    }
}
