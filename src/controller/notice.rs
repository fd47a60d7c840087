/// How a notice should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// How long a notice stays on screen. Actual durations come from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLength {
    Short,
    Long,
}

/// A transient message for the notification channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub length: NoticeLength,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            length: NoticeLength::Short,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            length: NoticeLength::Long,
        }
    }
}
