//! Status notifications
//!
//! Transient success/error messages shown in the status area. Each message
//! expires after a fixed number of seconds.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Action completed
    Success,
    /// Action rejected or failed
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Error => "x",
        }
    }
}

/// A status notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// When the notification was created
    pub created_at: Instant,
    /// How long to display it
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the notification has expired at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

/// The notifications currently on screen
///
/// A new notification replaces the current one, so only the latest message
/// is shown.
#[derive(Debug)]
pub struct NotificationQueue {
    current: Option<Notification>,
    duration: Duration,
}

impl NotificationQueue {
    /// Create a queue whose notifications last `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a success message
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Success, self.duration));
    }

    /// Show an error message
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Error, self.duration));
    }

    /// Show a notification, replacing the current one
    pub fn push(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Remove the current notification if it has expired at `now`
    pub fn remove_expired_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
    }

    /// Remove the current notification if it has expired
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_latest_replaces_current() {
        let mut queue = NotificationQueue::default();
        assert!(queue.is_empty());

        queue.error("Amount must be a number.");
        queue.success("Expense added successfully.");

        let current = queue.current().unwrap();
        assert_eq!(current.message, "Expense added successfully.");
        assert_eq!(current.notification_type, NotificationType::Success);
    }

    #[test]
    fn test_expiry() {
        let mut queue = NotificationQueue::new(Duration::from_secs(4));
        queue.success("Exported to CSV.");
        let created = queue.current().unwrap().created_at;

        queue.remove_expired_at(created + Duration::from_secs(3));
        assert!(!queue.is_empty());

        queue.remove_expired_at(created + Duration::from_secs(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let n = Notification::new("x", NotificationType::Error, Duration::ZERO);
        assert!(n.is_expired());
    }
}
