//! Page controllers for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page holds the state its screen renders and talks to collaborators
//! taken from the [`AppContext`](crate::app::AppContext). The hosting layer
//! calls `init` once when the screen becomes active, then forwards user
//! actions to the page's methods.
//!
//! ERROR HANDLING
//! ==============
//! Login and register fold failures into an `on_error` flag the screen shows,
//! and also return the error. Other pages return [`PageError`] and leave
//! their state untouched on failure.

pub mod account;
pub mod login;
pub mod not_found;
pub mod register;
pub mod session_detail;
pub mod session_form;
pub mod session_list;

#[cfg(test)]
#[path = "doubles_test.rs"]
pub(crate) mod doubles;

use crate::forms::FormErrors;
use crate::net::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no user is logged in")]
    NotLoggedIn,

    #[error("form is invalid: {}", .0.messages().join(", "))]
    InvalidForm(FormErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}
