//! Notifications: a line of text and a severity, produced for every command.

use std::time::Duration;

/// How prominently a notification should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Routine confirmation.
    Info,
    /// Something was skipped or only partly done.
    Warning,
    /// The command failed.
    Error,
}

impl Severity {
    /// Upper-case label, e.g. `"ERROR"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// User-facing outcome of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// How long a front end should keep it on screen.
    pub duration: Duration,
}

impl Notification {
    /// Default display time.
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

    /// Create a notification with the default duration.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: Self::DEFAULT_DURATION,
        }
    }

    /// Info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Override the display time.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Emit through the `log` facade at the matching level.
    pub fn log(&self) {
        match self.severity {
            Severity::Info => log::info!("{}", self.message),
            Severity::Warning => log::warn!("{}", self.message),
            Severity::Error => log::error!("{}", self.message),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let n = Notification::error("Could not align objects");
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.duration, Duration::from_secs(3));
        assert_eq!(n.to_string(), "[ERROR] Could not align objects");
    }

    #[test]
    fn test_notification_duration() {
        let n = Notification::info("help").with_duration(Duration::from_secs(10));
        assert_eq!(n.duration, Duration::from_secs(10));
        assert!(Severity::Warning > Severity::Info);
    }
}
