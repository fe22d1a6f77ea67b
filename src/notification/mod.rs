//! Notification module for quicksearch
//!
//! Provides transient toast messages for the terminal surface: selections,
//! submits, clears and config warnings.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
