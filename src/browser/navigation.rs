//! Full-page navigation through `window.location`.

use crate::console::ports::Navigator;

pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("redirect to {path} failed: {}", super::js_err(&e));
            }
        }
    }
}
