// Despacho - app/toast.rs
//
// Transient alert primitive. At most one alert is live at a time; a new
// `show` replaces both the text and the pending auto-hide deadline, so
// the previous alert's timer can never fire late over the new one.

use std::time::{Duration, Instant};

/// Visual flavour of a transient alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation, e.g. "Alerta enviada".
    Info,
    /// Warning, e.g. "No hay unidades disponibles".
    Warning,
}

/// A single visible transient alert with its auto-hide deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    deadline: Instant,
}

impl Toast {
    /// Create a toast that auto-hides `timeout` from now.
    pub fn new(text: impl Into<String>, kind: ToastKind, timeout: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            deadline: Instant::now() + timeout,
        }
    }

    /// True once the auto-hide deadline has passed.
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until auto-hide (zero once expired). Used to schedule the
    /// next repaint so the toast disappears promptly even on an idle UI.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
