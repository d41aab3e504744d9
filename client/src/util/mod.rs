//! Utility helpers shared across client modules.

pub mod date;
pub mod snackbar;
