//! # Notifications
//!
//! The toast layer. Widgets push [`Notification`]s through the
//! [`Notifier`] port; [`ToastQueue`] keeps them for the shell to display and
//! stamps each one with its on-screen duration.
//!
//! The shell is expected to [`ToastQueue::drain`] after each render. A shell
//! that never drains still holds at most [`MAX_TOASTS`]; the oldest toast is
//! dropped first.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::ports::Notifier;
use crate::state::NotificationSettings;

/// Toasts kept before the oldest is evicted.
pub const MAX_TOASTS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// A notification as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub level: NotificationLevel,
    pub message: String,
    #[ts(type = "number")]
    pub duration_ms: u64,
}

/// In-memory toast queue, newest last. Clones share the queue.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    settings: NotificationSettings,
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastQueue {
    pub fn new(settings: NotificationSettings) -> Self {
        ToastQueue {
            settings,
            toasts: Arc::default(),
        }
    }

    fn duration_for(&self, level: NotificationLevel) -> u64 {
        match level {
            NotificationLevel::Success => self.settings.success_ms,
            NotificationLevel::Error => self.settings.error_ms,
            NotificationLevel::Info => self.settings.info_ms,
        }
    }

    /// Current toasts without removing them.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all toasts.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of error toasts currently queued.
    pub fn error_count(&self) -> usize {
        self.snapshot()
            .iter()
            .filter(|t| t.level == NotificationLevel::Error)
            .count()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => warn!(message = %notification.message, "toast"),
            _ => info!(message = %notification.message, "toast"),
        }

        let toast = Toast {
            level: notification.level,
            duration_ms: self.duration_for(notification.level),
            message: notification.message,
        };
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        if toasts.len() >= MAX_TOASTS {
            let evicted = toasts.remove(0);
            debug!(message = %evicted.message, "toast queue full, dropping oldest");
        }
        toasts.push(toast);
    }
}
