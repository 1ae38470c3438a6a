//! Signal-backed toast notifier.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::console::ports::{Notifier, Timers};
use crate::state::toast::{Severity, ToastState};

/// Pushes toasts into a signal and removes each one after `ttl`.
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    timers: Rc<dyn Timers>,
    ttl: Duration,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>, timers: Rc<dyn Timers>, ttl: Duration) -> Self {
        Self { toasts, timers, ttl }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(message, severity));

        let toasts = self.toasts;
        self.timers.set_timeout(
            self.ttl,
            Box::new(move || {
                toasts.update(|t| {
                    t.dismiss(id);
                });
            }),
        );
    }
}
