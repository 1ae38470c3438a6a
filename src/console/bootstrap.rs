//! Console bootstrap and per-channel actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ConsoleApp` sequences startup (authenticate, initialize channel state,
//! bind events, connect realtime) and then serves the send, switch, and
//! logout actions triggered from the view.
//!
//! ERROR HANDLING
//! ==============
//! Any failure before the realtime step aborts startup and redirects to
//! login. A realtime failure is logged and the console runs without live
//! updates. Send actions never return errors; failures become toasts.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::console::badges::BadgeSimulator;
use crate::console::events::{ConsoleEvent, EventBus};
use crate::console::ports::{ApiClient, ChannelManager, InputField, Navigator, Notifier, TokenStore, Timers};
use crate::error::ConsoleError;
use crate::net::types::User;
use crate::state::channels::{ChannelId, Message, Sender};
use crate::state::toast::Severity;

/// Collaborators injected into the console.
pub struct ConsoleDeps {
    pub api: Rc<dyn ApiClient>,
    pub channels: Rc<dyn ChannelManager>,
    pub tokens: Rc<dyn TokenStore>,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub timers: Rc<dyn Timers>,
}

/// Channel → input mapping supplied by the view at construction.
#[derive(Clone, Default)]
pub struct ViewBindings {
    inputs: BTreeMap<ChannelId, Rc<dyn InputField>>,
}

impl ViewBindings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bind(mut self, channel: ChannelId, input: Rc<dyn InputField>) -> Self {
        self.inputs.insert(channel, input);
        self
    }

    pub fn input(&self, channel: ChannelId) -> Option<&Rc<dyn InputField>> {
        self.inputs.get(&channel)
    }
}

/// Result of a send action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Startup has not bound events, or the input is blank or unbound;
    /// nothing happened.
    Skipped,
    Sent,
    /// The failure was logged and shown as a toast.
    Failed,
}

/// Enter without Shift submits a channel input.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

pub struct ConsoleApp {
    config: ConsoleConfig,
    deps: ConsoleDeps,
    bindings: ViewBindings,
    bus: EventBus,
    user: RefCell<Option<User>>,
    initialized: Cell<bool>,
    /// Set by startup step 3; sends are ignored until then.
    bound: Cell<bool>,
}

impl ConsoleApp {
    pub fn new(config: ConsoleConfig, deps: ConsoleDeps, bindings: ViewBindings) -> Self {
        Self {
            config,
            deps,
            bindings,
            bus: EventBus::new(),
            user: RefCell::new(None),
            initialized: Cell::new(false),
            bound: Cell::new(false),
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    // =========================================================================
    // STARTUP
    // =========================================================================

    /// Run startup. On failure the user has already been sent to login.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted startup.
    pub async fn init(&self) -> Result<(), ConsoleError> {
        match self.startup().await {
            Ok(()) => {
                self.initialized.set(true);
                log::info!("agent console initialized");
                Ok(())
            }
            Err(e) if e.is_fatal() => {
                log::error!("console initialization failed: {e}");
                self.redirect_to_login();
                Err(e)
            }
            Err(e) => {
                log::warn!("console started with errors: {e}");
                Err(e)
            }
        }
    }

    async fn startup(&self) -> Result<(), ConsoleError> {
        let token = self.check_authentication().await?;
        self.initialize_components().await?;
        self.bind_events();
        self.connect_realtime(&token);
        Ok(())
    }

    async fn check_authentication(&self) -> Result<String, ConsoleError> {
        let token = self
            .deps
            .tokens
            .get()
            .filter(|t| !t.is_empty())
            .ok_or(ConsoleError::MissingToken)?;

        match self.deps.api.get_current_user(&token).await {
            Ok(user) => {
                log::info!("agent authenticated: {} ({})", user.name, user.id);
                *self.user.borrow_mut() = Some(user);
                Ok(token)
            }
            Err(e) => {
                self.deps.tokens.remove();
                Err(ConsoleError::AuthFailed(e.to_string()))
            }
        }
    }

    async fn initialize_components(&self) -> Result<(), ConsoleError> {
        self.deps.channels.initialize().await.map_err(|e| match e {
            ConsoleError::ComponentInit(_) => e,
            other => ConsoleError::ComponentInit(other.to_string()),
        })?;
        self.start_periodic_updates();
        Ok(())
    }

    /// Badge counts live in channel state; the `badge-<channel>` elements
    /// render from it and are never written directly.
    fn start_periodic_updates(&self) {
        let channels = Rc::clone(&self.deps.channels);
        let mut simulator = BadgeSimulator::new(self.deps.timers.now_ms().to_bits(), self.config.badge_probability);
        let period = Duration::from_millis(u64::from(self.config.badge_interval_ms));

        self.deps.timers.set_interval(
            period,
            Box::new(move || {
                if let Some(channel) = simulator.tick(channels.as_ref()) {
                    log::debug!("simulated arrival on {channel}");
                }
            }),
        );
    }

    fn bind_events(&self) {
        for channel in ChannelId::ALL {
            if self.bindings.input(channel).is_none() {
                log::debug!("no input bound for {channel}; sends on it are ignored");
            }
        }

        let notifier = Rc::clone(&self.deps.notifier);
        self.bus.subscribe(move |event| match event {
            ConsoleEvent::NewMessage { .. } => notifier.notify("New message received", Severity::Info),
            ConsoleEvent::Notification { message } => notifier.notify(message, Severity::Info),
        });
        self.bound.set(true);
    }

    fn connect_realtime(&self, token: &str) {
        if let Err(e) = self.deps.api.connect_realtime(token, self.bus.clone()) {
            log::warn!("continuing without live updates: {e}");
        }
    }

    fn redirect_to_login(&self) {
        self.deps.navigator.redirect(&self.config.login_path);
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Send the text of `channel`'s input.
    pub async fn send(&self, channel: ChannelId) -> SendOutcome {
        if !self.bound.get() {
            log::debug!("ignoring {channel} send before startup");
            return SendOutcome::Skipped;
        }
        match channel {
            ChannelId::Chat => self.send_message().await,
            ChannelId::Email => self.send_outbound(channel, "Email sent successfully"),
            ChannelId::Social => self.send_outbound(channel, "Social reply posted"),
            ChannelId::Web => self.send_outbound(channel, "Response sent successfully"),
        }
    }

    /// Chat sends are optimistic and local-only: the message is appended to
    /// the active conversation and analysed, but backend delivery is not
    /// wired yet.
    async fn send_message(&self) -> SendOutcome {
        let Some((input, text)) = self.read_input(ChannelId::Chat) else {
            return SendOutcome::Skipped;
        };

        match self.append_and_analyze(input.as_ref(), text).await {
            Ok(()) => SendOutcome::Sent,
            Err(e) => {
                log::error!("send message failed: {e}");
                self.show_notification("Failed to send message", Severity::Error);
                SendOutcome::Failed
            }
        }
    }

    async fn append_and_analyze(&self, input: &dyn InputField, text: String) -> Result<(), ConsoleError> {
        let channels = &self.deps.channels;
        let channel = channels.current_channel();
        channels.append_message(channel, Message::new(Sender::Agent, text, self.deps.timers.now_ms()));

        input.clear();
        channels.render_conversation();
        channels.analyze_conversation().await
    }

    fn send_outbound(&self, channel: ChannelId, confirmation: &str) -> SendOutcome {
        let Some((input, text)) = self.read_input(channel) else {
            return SendOutcome::Skipped;
        };

        log::info!("{channel} reply sent: {text}");
        input.clear();
        self.show_notification(confirmation, Severity::Success);
        SendOutcome::Sent
    }

    /// Trimmed, non-blank text of a bound input.
    fn read_input(&self, channel: ChannelId) -> Option<(Rc<dyn InputField>, String)> {
        let input = self.bindings.input(channel)?;
        let text = input.value().trim().to_owned();
        if text.is_empty() {
            return None;
        }
        Some((Rc::clone(input), text))
    }

    pub fn show_notification(&self, message: &str, severity: Severity) {
        self.deps.notifier.notify(message, severity);
    }

    pub fn switch_channel(&self, channel: ChannelId) {
        self.deps.channels.switch_channel(channel);
    }

    /// End the session and return to login. Server errors are not fatal.
    pub async fn logout(&self) {
        let token = self.deps.tokens.get();
        if let Err(e) = self.deps.api.logout(token.as_deref()).await {
            log::warn!("logout request failed: {e}");
        }
        self.deps.tokens.remove();
        *self.user.borrow_mut() = None;
        self.bound.set(false);
        self.redirect_to_login();
    }
}
