//! Transient user-facing notifications.
//!
//! Every caught API error ends up here as a short message; nothing in the
//! client is fatal. Front ends decide how to display them.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Receiver of per-action success and failure messages.
pub trait ToastSink: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Keeps every toast in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingToasts {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingToasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|t| t.level == ToastLevel::Error)
            .map(|t| t.message)
            .collect()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|mut t| std::mem::take(&mut *t))
            .unwrap_or_default()
    }

    fn push(&self, level: ToastLevel, message: &str) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(Toast {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl ToastSink for RecordingToasts {
    fn info(&self, message: &str) {
        self.push(ToastLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}

/// Forwards toasts to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn info(&self, message: &str) {
        tracing::info!(target: "familia::toast", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "familia::toast", "{}", message);
    }
}
