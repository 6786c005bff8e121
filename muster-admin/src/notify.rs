//! Toast notifications.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Toast notification level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Message to display (single line)
    pub message: String,
    /// Toast level (affects styling)
    pub level: ToastLevel,
    /// How long to show the toast
    pub duration: Duration,
}

impl Toast {
    /// Create a simple info toast
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
            duration: Duration::from_secs(3),
        }
    }

    /// Create a success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
            duration: Duration::from_secs(3),
        }
    }

    /// Create a warning toast
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
            duration: Duration::from_secs(4),
        }
    }

    /// Create an error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
            duration: Duration::from_secs(5),
        }
    }

    /// Set custom duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Queue of pending toasts, shared across controllers.
///
/// Controllers push from wherever work completes, including background
/// fetch tasks; the front end drains on its next frame.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    pending: Arc<Mutex<VecDeque<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast notification.
    ///
    /// Accepts either a string (creates an info toast) or a Toast directly.
    pub fn push(&self, toast: impl Into<Toast>) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push_back(toast.into());
        }
    }

    /// Take every queued toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.pending
            .lock()
            .map(|mut pending| pending.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.is_empty())
            .unwrap_or(true)
    }
}
