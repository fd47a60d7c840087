use std::time::{Duration, Instant};

use crate::config::NotificationConfig;
use crate::controller::{Notice, Severity};

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    durations: NotificationConfig,
}

impl NotificationState {
    pub fn new(durations: NotificationConfig) -> Self {
        Self {
            current: None,
            durations,
        }
    }

    /// Show an info message for the short duration
    #[cfg(test)]
    pub fn show(&mut self, message: &str) {
        self.show_notice(&Notice::info(message));
    }

    pub fn show_notice(&mut self, notice: &Notice) {
        let duration = self.durations.duration_for(notice.length);
        self.show_for(&notice.message, notice.severity, duration);
    }

    pub(super) fn show_for(&mut self, message: &str, severity: Severity, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            severity,
            shown_at: Instant::now(),
            duration,
        });
    }

    /// The active notification, if it has not expired
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| !n.is_expired())
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current().map(|n| n.message.as_str())
    }

    /// Drop the notification once expired. Returns true if one was removed.
    pub fn clear_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
