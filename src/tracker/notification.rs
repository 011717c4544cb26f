//! User-visible notifications
//!
//! The tracker queues a short message for every mutation and every load or
//! save problem; the presentation layer drains and shows them.

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Single-character marker shown before the message
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Warnings and errors go to stderr
    pub fn is_problem(&self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// Remove and return everything pending
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
