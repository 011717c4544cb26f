//! Notification display formatting

use crate::tracker::Notification;

/// One line per notification: "[!] Warning: message"
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}: {}",
        notification.kind.icon(),
        notification.kind.title(),
        notification.message
    )
}
