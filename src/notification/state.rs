use std::time::{Duration, Instant};

/// How long a notification stays on screen by default
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

/// At most one notification is shown; a new one replaces the old one
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.show_with(message, NotificationKind::Info, DEFAULT_DURATION);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        // Warnings stay up longer
        self.show_with(message, NotificationKind::Warning, DEFAULT_DURATION * 3);
    }

    pub fn show_with(&mut self, message: impl Into<String>, kind: NotificationKind, duration: Duration) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        });
    }

    /// Drop the notification once it has expired. Returns true if it was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
