//! Transient notifications

use std::time::Duration;

use crate::gateway::GatewayError;

const ERROR_TTL: Duration = Duration::from_secs(4);
const SUCCESS_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// How long the toast stays before it is dismissed automatically
    pub ttl: Duration,
}

/// Ordered toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return it so the caller can schedule its dismissal
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Toast {
        self.next_id += 1;
        let ttl = match kind {
            ToastKind::Success => SUCCESS_TTL,
            ToastKind::Error => ERROR_TTL,
        };
        let toast = Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            ttl,
        };
        self.toasts.push(toast.clone());
        toast
    }

    pub fn error(&mut self, message: impl Into<String>) -> Toast {
        self.push(ToastKind::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Toast {
        self.push(ToastKind::Success, message)
    }

    /// Remove a toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast text for a failed notes fetch
#[must_use]
pub fn fetch_error_message(error: &GatewayError) -> String {
    format!("Error: {error}")
}
