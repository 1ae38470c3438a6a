//! Transient notification ("toast") state.
//!
//! Toasts are pushed by the notifier and removed by a one-shot timer; the
//! stack component only renders what is in `ToastState::items`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Positioning and shape shared by every toast.
pub const TOAST_BASE_CLASS: &str = "fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Fixed color classes for this severity.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500 text-white",
            Self::Error => "bg-red-500 text-white",
            Self::Warning => "bg-yellow-500 text-white",
            Self::Info => "bg-blue-500 text-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    /// Full class attribute for the toast element.
    pub fn class(&self) -> String {
        format!("{TOAST_BASE_CLASS} {}", self.severity.css_class())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Add a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into(), severity });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
