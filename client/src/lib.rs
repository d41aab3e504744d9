//! Yoga Studio client library.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the process-wide login state, `net` talks to the studio REST
//! API, `forms` validates user input, `pages` orchestrate one screen each, and
//! `router` resolves paths through the auth guards. The hosting UI (or the
//! `yoga` CLI) constructs one [`state::session::SessionState`] at startup and
//! passes handles to everything that needs it.

pub mod app;
pub mod forms;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;
