//! Session list page.

use std::sync::Arc;

use super::PageError;
use crate::app::AppContext;
use crate::net::SessionApi;
use crate::net::types::{Session, SessionInformation};
use crate::state::session::SessionState;
use crate::util::date::long_date;

pub struct SessionListPage {
    pub sessions: Vec<Session>,
    api: Arc<dyn SessionApi>,
    session: SessionState,
}

impl SessionListPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { sessions: Vec::new(), api: ctx.sessions.clone(), session: ctx.session.clone() }
    }

    /// # Errors
    ///
    /// Returns the API failure; the previous list is kept.
    pub async fn init(&mut self) -> Result<(), PageError> {
        self.sessions = self.api.all().await?;
        Ok(())
    }

    pub fn user(&self) -> Option<SessionInformation> {
        self.session.session_information()
    }

    /// Admins get the Create and Edit buttons.
    pub fn can_manage(&self) -> bool {
        self.session.is_admin()
    }

    /// `Session on June 27, 2025` under each card title.
    pub fn date_caption(session: &Session) -> String {
        let date = long_date(&session.date).unwrap_or_else(|| session.date.clone());
        format!("Session on {date}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::types::test_helpers::{session_info, yoga_session};
    use crate::pages::doubles::{Call, Harness, MockApi};
    use std::sync::Mutex;

    fn two_sessions() -> MockApi {
        MockApi { sessions: Mutex::new(vec![yoga_session(1, 1, vec![]), yoga_session(2, 2, vec![3])]), ..MockApi::default() }
    }

    #[tokio::test]
    async fn init_loads_all_sessions() {
        let harness = Harness::logged_in(two_sessions(), session_info(3, false));
        let mut page = SessionListPage::new(&harness.ctx);

        page.init().await.unwrap();

        assert_eq!(harness.api.calls(), vec![Call::AllSessions]);
        assert_eq!(page.sessions.iter().map(|s| s.id).collect::<Vec<_>>(), vec![Some(1), Some(2)]);
        assert_eq!(page.user().map(|u| u.id), Some(3));
    }

    #[tokio::test]
    async fn empty_list_is_fine() {
        let harness = Harness::logged_in(MockApi::default(), session_info(3, false));
        let mut page = SessionListPage::new(&harness.ctx);
        page.init().await.unwrap();
        assert!(page.sessions.is_empty());
    }

    #[test]
    fn only_admins_manage() {
        let admin = Harness::logged_in(MockApi::default(), session_info(1, true));
        let regular = Harness::logged_in(MockApi::default(), session_info(2, false));
        assert!(SessionListPage::new(&admin.ctx).can_manage());
        assert!(!SessionListPage::new(&regular.ctx).can_manage());
    }

    #[test]
    fn caption_uses_long_date() {
        assert_eq!(SessionListPage::date_caption(&yoga_session(1, 1, vec![])), "Session on June 27, 2025");
    }

    #[tokio::test]
    async fn failure_keeps_previous_list() {
        let harness = Harness::logged_in(MockApi { fail_status: Some(500), ..MockApi::default() }, session_info(1, true));
        let mut page = SessionListPage::new(&harness.ctx);
        page.sessions = vec![yoga_session(9, 1, vec![])];

        assert!(page.init().await.is_err());
        assert_eq!(page.sessions.len(), 1);
    }
}
