//! `gloo-timers` backed clock and scheduling.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};

use crate::console::ports::Timers;

pub struct BrowserTimers;

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

impl Timers for BrowserTimers {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    // Timers live for the page; nothing cancels them.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), callback).forget();
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) {
        Interval::new(millis(period), callback).forget();
    }
}
