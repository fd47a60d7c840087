// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::controller::NoticeLength;

const DEFAULT_SHORT_MS: u64 = 2000;
const DEFAULT_LONG_MS: u64 = 3500;
const MIN_DURATION_MS: u64 = 100;

/// Notification configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_short_ms")]
    pub short_ms: u64,
    #[serde(default = "default_long_ms")]
    pub long_ms: u64,
}

fn default_short_ms() -> u64 {
    DEFAULT_SHORT_MS
}

fn default_long_ms() -> u64 {
    DEFAULT_LONG_MS
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            short_ms: DEFAULT_SHORT_MS,
            long_ms: DEFAULT_LONG_MS,
        }
    }
}

impl NotificationConfig {
    /// On-screen duration for a notice length, never shorter than 100ms
    pub fn duration_for(&self, length: NoticeLength) -> Duration {
        let ms = match length {
            NoticeLength::Short => self.short_ms,
            NoticeLength::Long => self.long_ms,
        };
        Duration::from_millis(ms.max(MIN_DURATION_MS))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,
}
