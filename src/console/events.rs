//! Realtime console events and their subscription bus.
//!
//! DESIGN
//! ======
//! The socket and the DOM both produce `newMessage` / `notification`
//! events. They are normalized into `ConsoleEvent` and fanned out to
//! subscribers in registration order on the UI thread.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::RealtimeFrame;
use crate::state::channels::ChannelId;

pub const NEW_MESSAGE_EVENT: &str = "newMessage";
pub const NOTIFICATION_EVENT: &str = "notification";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    NewMessage { channel: Option<ChannelId> },
    Notification { message: String },
}

impl ConsoleEvent {
    /// DOM custom-event name for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMessage { .. } => NEW_MESSAGE_EVENT,
            Self::Notification { .. } => NOTIFICATION_EVENT,
        }
    }

    /// Value carried as `detail.message` on the DOM event, if any.
    pub fn detail_message(&self) -> Option<&str> {
        match self {
            Self::NewMessage { .. } => None,
            Self::Notification { message } => Some(message),
        }
    }

    pub fn from_frame(frame: RealtimeFrame) -> Option<Self> {
        match frame {
            RealtimeFrame::NewMessage { channel } => {
                Some(Self::NewMessage { channel: channel.and_then(|c| c.parse().ok()) })
            }
            RealtimeFrame::Notification { message } => Some(Self::Notification { message }),
            RealtimeFrame::Unknown => None,
        }
    }

    /// Build an event from a DOM custom event name and its `detail.message`.
    pub fn from_dom(name: &str, detail_message: Option<String>) -> Option<Self> {
        match name {
            NEW_MESSAGE_EVENT => Some(Self::NewMessage { channel: None }),
            NOTIFICATION_EVENT => detail_message.map(|message| Self::Notification { message }),
            _ => None,
        }
    }
}

type Subscriber = Rc<dyn Fn(&ConsoleEvent)>;

/// Single-threaded observer list. Clones share the same subscribers.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(&ConsoleEvent) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(handler));
    }

    /// Deliver `event` to every subscriber registered so far.
    pub fn publish(&self, event: &ConsoleEvent) {
        // Snapshot so handlers may subscribe without a re-borrow panic.
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for handler in subscribers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").field("subscribers", &self.subscriber_count()).finish()
    }
}
