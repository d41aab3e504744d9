//! Transient user notices ("Session created !" and friends).
//!
//! DESIGN
//! ======
//! Pages report through the [`Notifier`] seam; [`Snackbar`] is the in-memory
//! queue the hosting layer drains to display them.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::info;

/// How long studio notices stay on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// Action label on every studio notice.
pub const CLOSE_ACTION: &str = "Close";

pub trait Notifier: Send + Sync {
    fn open(&self, message: &str, action: &str, duration: Duration);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

/// Queue of notices waiting to be shown.
#[derive(Debug, Default)]
pub struct Snackbar {
    pending: Mutex<Vec<Notice>>,
}

impl Snackbar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove and return every pending notice, oldest first.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }
}

impl Notifier for Snackbar {
    fn open(&self, message: &str, action: &str, duration: Duration) {
        info!(message, "notice");
        self.lock().push(Notice { message: message.to_owned(), action: action.to_owned(), duration });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_in_order() {
        let snackbar = Snackbar::new();
        snackbar.open("Session created !", CLOSE_ACTION, NOTICE_DURATION);
        snackbar.open("Session deleted !", CLOSE_ACTION, NOTICE_DURATION);

        let notices = snackbar.take();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "Session created !");
        assert_eq!(notices[1].duration, Duration::from_millis(3000));
        assert!(snackbar.take().is_empty());
    }
}
