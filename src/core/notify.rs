//! Toast notification model.
//!
//! [`ToastStack`] is the plain state behind the toast host; [`Notifier`] is the
//! capability handed to anything that wants to show a toast.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How long a toast stays up before dismissing itself
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Maximum number of toasts visible at once
pub const MAX_VISIBLE_TOASTS: usize = 1;

/// Toast category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Inline style for the toast body
    pub fn style(&self) -> &'static str {
        match self {
            ToastKind::Success => {
                "background: linear-gradient(135deg, #6352F4 0%, #8D27F1 100%); color: white; \
                 font-weight: 500; font-size: 14px; border-radius: 1000px; border: none;"
            }
            ToastKind::Error => {
                "background: #D32F2F; color: white; font-weight: 500; font-size: 14px; \
                 border-radius: 1000px; border: none;"
            }
            ToastKind::Info => {
                "background: #1d1d1d; color: white; font-weight: 500; font-size: 14px; \
                 border-radius: 1000px; border: none;"
            }
        }
    }

    /// ARIA role: errors interrupt, everything else is polite
    pub fn aria_role(&self) -> &'static str {
        match self {
            ToastKind::Error => "alert",
            _ => "status",
        }
    }
}

/// A single toast message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }
}

/// Toast with unique ID for tracking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastStack {
    items: VecDeque<ToastItem>,
    next_id: u64,
    capacity: usize,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VISIBLE_TOASTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Add a toast, evicting the oldest ones over capacity. Returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push_back(ToastItem { id, toast });
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
        id
    }

    /// Remove a toast by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> impl Iterator<Item = &ToastItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability to show toasts
pub trait Notifier {
    fn notify(&self, toast: Toast);

    fn success(&self, message: impl Into<String>) {
        self.notify(Toast::success(message));
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(Toast::error(message));
    }

    fn info(&self, message: impl Into<String>) {
        self.notify(Toast::info(message));
    }
}
