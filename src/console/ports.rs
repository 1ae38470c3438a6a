//! Collaborator seams for the console bootstrap.
//!
//! Everything the bootstrap touches outside its own state goes through one
//! of these traits. The browser build supplies web-backed implementations;
//! tests supply doubles. All of them run on the single UI thread, so none of
//! them require `Send`.

use std::time::Duration;

use leptos::prelude::*;

use crate::console::events::EventBus;
use crate::error::ConsoleError;
use crate::net::types::User;
use crate::state::channels::{ChannelId, Message};
use crate::state::toast::Severity;

/// Backend access: identity, realtime transport, and session teardown.
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// Fetch the profile of the user owning `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    async fn get_current_user(&self, token: &str) -> Result<User, ConsoleError>;

    /// Open the realtime transport. Inbound events are published on `bus`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Realtime`] if the transport cannot be opened.
    fn connect_realtime(&self, token: &str, bus: EventBus) -> Result<(), ConsoleError>;

    /// End the server-side session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn logout(&self, token: Option<&str>) -> Result<(), ConsoleError>;
}

/// Owner of conversations, the active channel, and unread badges.
#[async_trait::async_trait(?Send)]
pub trait ChannelManager {
    /// # Errors
    ///
    /// Returns [`ConsoleError::ComponentInit`] if channel state cannot be set up.
    async fn initialize(&self) -> Result<(), ConsoleError>;

    fn current_channel(&self) -> ChannelId;

    fn append_message(&self, channel: ChannelId, message: Message);

    fn render_conversation(&self);

    /// # Errors
    ///
    /// Returns an error if the analysis could not be produced.
    async fn analyze_conversation(&self) -> Result<(), ConsoleError>;

    fn switch_channel(&self, channel: ChannelId);

    fn badge(&self, channel: ChannelId) -> u32;

    fn update_notification_badge(&self, channel: ChannelId, count: u32);
}

/// Persisted auth token. The login page writes it; the console only reads
/// and clears it.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn remove(&self);
}

/// Full-page navigation.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Transient notification surface.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Clock and timer scheduling.
pub trait Timers {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);
    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>);
}

/// A text input bound to one channel.
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
}

impl InputField for RwSignal<String> {
    fn value(&self) -> String {
        self.get_untracked()
    }

    fn clear(&self) {
        self.set(String::new());
    }
}
