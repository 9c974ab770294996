//! Transient notifications ("toasts").

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

/// How many notifications are kept at once. Older ones are dropped first.
pub const NOTIFICATION_LIMIT: usize = 3;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.queue.len() == NOTIFICATION_LIMIT {
            self.queue.pop_front();
        }
        self.queue.push_back(notification);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop notifications older than the on-screen lifetime.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        let ttl = Duration::seconds(NOTIFICATION_TTL_SECS);
        self.queue.retain(|n| now - n.raised_at < ttl);
    }
}
