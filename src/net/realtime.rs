//! Realtime socket reader.
//!
//! Each text frame is parsed as a `RealtimeFrame` and re-dispatched on the
//! window as a `newMessage` / `notification` custom event. The window
//! listeners installed by `browser::events` feed those into the `EventBus`,
//! so server pushes and page-level dispatches share one path. There is no
//! reconnect: when the socket closes the console stays in degraded mode.

use crate::console::events::{ConsoleEvent, EventBus};
use crate::net::types::RealtimeFrame;

/// Read frames until the socket closes.
pub async fn run(ws: gloo_net::websocket::futures::WebSocket, bus: EventBus) {
    use futures::StreamExt;
    use gloo_net::websocket::Message;

    let (_write, mut read) = ws.split();
    while let Some(msg) = read.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<RealtimeFrame>(&text) {
                Ok(frame) => {
                    if let Some(event) = ConsoleEvent::from_frame(frame) {
                        if crate::browser::events::dispatch(&event).is_err() {
                            // No window to dispatch on; deliver directly.
                            bus.publish(&event);
                        }
                    }
                }
                Err(e) => log::warn!("ignoring malformed realtime frame: {e}"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                log::warn!("realtime socket error: {e}");
                break;
            }
        }
    }
    log::info!("realtime socket closed");
}
