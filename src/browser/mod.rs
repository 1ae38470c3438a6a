//! Browser implementations of the console ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here needs `window` and is compiled only with `csr`. Each
//! type is a thin adapter; behavior lives in `console` and `state`.

pub mod events;
pub mod navigation;
pub mod storage;
pub mod timers;

/// Render a `JsValue` error for logs and `ConsoleError` payloads.
pub(crate) fn js_err(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
