//! Window custom events (`newMessage`, `notification`).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use super::js_err;
use crate::console::events::{ConsoleEvent, EventBus, NEW_MESSAGE_EVENT, NOTIFICATION_EVENT};
use crate::error::ConsoleError;

/// Dispatch `event` on `window`, with `detail.message` when it has one.
///
/// # Errors
///
/// Returns [`ConsoleError::Realtime`] if there is no window or the event
/// cannot be constructed.
pub fn dispatch(event: &ConsoleEvent) -> Result<(), ConsoleError> {
    let window = web_sys::window().ok_or_else(|| ConsoleError::Realtime("no window".into()))?;

    let init = web_sys::CustomEventInit::new();
    if let Some(message) = event.detail_message() {
        let detail = js_sys::Object::new();
        js_sys::Reflect::set(&detail, &JsValue::from_str("message"), &JsValue::from_str(message))
            .map_err(|e| ConsoleError::Realtime(js_err(&e)))?;
        init.set_detail(&detail);
    }

    let custom = web_sys::CustomEvent::new_with_event_init_dict(event.name(), &init)
        .map_err(|e| ConsoleError::Realtime(js_err(&e)))?;
    window
        .dispatch_event(&custom)
        .map_err(|e| ConsoleError::Realtime(js_err(&e)))?;
    Ok(())
}

fn detail_message(ev: &web_sys::Event) -> Option<String> {
    let detail = ev.dyn_ref::<web_sys::CustomEvent>()?.detail();
    js_sys::Reflect::get(&detail, &JsValue::from_str("message"))
        .ok()?
        .as_string()
}

/// Forward window custom events into `bus` for the lifetime of the page.
pub fn listen(bus: &EventBus) {
    let Some(window) = web_sys::window() else {
        return;
    };

    for name in [NEW_MESSAGE_EVENT, NOTIFICATION_EVENT] {
        let bus = bus.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            if let Some(event) = ConsoleEvent::from_dom(&ev.type_(), detail_message(&ev)) {
                bus.publish(&event);
            }
        });
        if let Err(e) = window.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref()) {
            log::warn!("could not listen for {name}: {}", js_err(&e));
        }
        callback.forget();
    }
}
