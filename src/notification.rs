//! Transient on-screen notifications.
//!
//! A notification is a short message with a severity label that stays on
//! screen for a fixed 3 seconds and then disappears. This is the same
//! pattern as an auto-clearing status line, generalized to a stack so
//! several notifications can be visible at once. Expiry runs on the main
//! event loop tick; once pushed there is no way to cancel it early.

use std::time::{Duration, Instant};

use anyhow::Result;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Visual style category for a notification.
///
/// Labels form an open set: anything we don't recognize degrades to `Info`
/// rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Parse a severity label. Unknown labels fall back to `Info`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" | "error" => Severity::Danger,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    created: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created: Instant::now(),
        }
    }

    /// An `Info` notification, the default when no severity is given.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::default())
    }

    /// Whether the 3-second lifetime has elapsed as of `now`.
    pub fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= NOTIFICATION_TTL
    }
}

/// Insertion-ordered stack of live notifications.
///
/// Deliberately unbounded: callers may push as fast as they like and every
/// notification gets its full lifetime. Rendering decides how many fit on
/// screen.
#[derive(Debug, Default)]
pub struct NotificationStack {
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            severity = notification.severity.as_str(),
            "notification: {}",
            notification.message
        );
        self.items.push(notification);
    }

    /// Drop every notification whose lifetime has elapsed.
    pub fn sweep(&mut self, now: Instant) {
        self.items.retain(|n| !n.expired_at(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Mirror a notification to the desktop via the notification daemon.
///
/// Uses the same 3-second timeout as the on-screen stack.
pub fn send_desktop(message: &str, severity: Severity) -> Result<()> {
    let urgency = match severity {
        Severity::Danger => notify_rust::Urgency::Critical,
        Severity::Warning => notify_rust::Urgency::Normal,
        Severity::Info | Severity::Success => notify_rust::Urgency::Low,
    };

    notify_rust::Notification::new()
        .summary("Shop Management System")
        .body(message)
        .icon("dialog-information")
        .urgency(urgency)
        .timeout(notify_rust::Timeout::Milliseconds(3000))
        .show()?;
    Ok(())
}
