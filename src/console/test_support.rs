//! Test doubles for the console ports.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::console::bootstrap::{ConsoleApp, ConsoleDeps, ViewBindings};
use crate::console::events::EventBus;
use crate::console::ports::{ApiClient, ChannelManager, InputField, Navigator, Notifier, TokenStore, Timers};
use crate::error::ConsoleError;
use crate::net::types::User;
use crate::state::channels::{ChannelId, ChannelState, Message};
use crate::state::toast::Severity;

pub fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Dana".to_owned(),
        email: Some("dana@example.com".to_owned()),
        avatar_url: None,
        role: "agent".to_owned(),
    }
}

// =============================================================
// ApiClient
// =============================================================

pub struct FakeApi {
    pub user: Option<User>,
    pub realtime_error: Option<String>,
    pub calls: RefCell<Vec<String>>,
    pub bus: RefCell<Option<EventBus>>,
}

impl FakeApi {
    pub fn accepting() -> Self {
        Self { user: Some(make_user()), realtime_error: None, calls: RefCell::default(), bus: RefCell::default() }
    }

    pub fn rejecting() -> Self {
        Self { user: None, ..Self::accepting() }
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for FakeApi {
    async fn get_current_user(&self, token: &str) -> Result<User, ConsoleError> {
        self.calls.borrow_mut().push(format!("get_current_user:{token}"));
        self.user.clone().ok_or(ConsoleError::Api { status: 401 })
    }

    fn connect_realtime(&self, _token: &str, bus: EventBus) -> Result<(), ConsoleError> {
        self.calls.borrow_mut().push("connect_realtime".to_owned());
        if let Some(reason) = &self.realtime_error {
            return Err(ConsoleError::Realtime(reason.clone()));
        }
        *self.bus.borrow_mut() = Some(bus);
        Ok(())
    }

    async fn logout(&self, _token: Option<&str>) -> Result<(), ConsoleError> {
        self.calls.borrow_mut().push("logout".to_owned());
        Ok(())
    }
}

// =============================================================
// ChannelManager
// =============================================================

#[derive(Default)]
pub struct FakeChannels {
    pub state: RefCell<ChannelState>,
    pub fail_init: bool,
    pub fail_analyze: bool,
    pub init_calls: Cell<u32>,
    pub render_calls: Cell<u32>,
    pub analyze_calls: Cell<u32>,
}

#[async_trait::async_trait(?Send)]
impl ChannelManager for FakeChannels {
    async fn initialize(&self) -> Result<(), ConsoleError> {
        self.init_calls.set(self.init_calls.get() + 1);
        if self.fail_init {
            return Err(ConsoleError::ComponentInit("channel store unavailable".into()));
        }
        self.state.borrow_mut().initialize();
        Ok(())
    }

    fn current_channel(&self) -> ChannelId {
        self.state.borrow().current
    }

    fn append_message(&self, channel: ChannelId, message: Message) {
        self.state.borrow_mut().append(channel, message);
    }

    fn render_conversation(&self) {
        self.render_calls.set(self.render_calls.get() + 1);
        self.state.borrow_mut().request_render();
    }

    async fn analyze_conversation(&self) -> Result<(), ConsoleError> {
        self.analyze_calls.set(self.analyze_calls.get() + 1);
        if self.fail_analyze {
            return Err(ConsoleError::Send("analysis backend down".into()));
        }
        self.state.borrow_mut().analyze();
        Ok(())
    }

    fn switch_channel(&self, channel: ChannelId) {
        self.state.borrow_mut().switch_to(channel);
    }

    fn badge(&self, channel: ChannelId) -> u32 {
        self.state.borrow().badge(channel)
    }

    fn update_notification_badge(&self, channel: ChannelId, count: u32) {
        self.state.borrow_mut().set_badge(channel, count);
    }
}

// =============================================================
// TokenStore / Navigator / Notifier
// =============================================================

#[derive(Default)]
pub struct MemoryTokens {
    pub token: RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn with(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub redirects: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<(String, Severity)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.shown.borrow_mut().push((message.to_owned(), severity));
    }
}

// =============================================================
// Timers
// =============================================================

/// Timers that only fire when the test says so.
#[derive(Default)]
pub struct ManualTimers {
    pub now: Cell<f64>,
    pub timeouts: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    pub intervals: RefCell<Vec<(Duration, Box<dyn FnMut()>)>>,
}

impl ManualTimers {
    /// Fire every pending one-shot timer, returning their delays.
    pub fn fire_timeouts(&self) -> Vec<Duration> {
        let pending: Vec<_> = self.timeouts.borrow_mut().drain(..).collect();
        pending
            .into_iter()
            .map(|(delay, callback)| {
                callback();
                delay
            })
            .collect()
    }

    /// Run every interval callback `n` times.
    pub fn tick_intervals(&self, n: usize) {
        let mut intervals = self.intervals.borrow_mut();
        for _ in 0..n {
            for (_, callback) in intervals.iter_mut() {
                callback();
            }
        }
    }
}

impl Timers for ManualTimers {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        self.timeouts.borrow_mut().push((delay, callback));
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) {
        self.intervals.borrow_mut().push((period, callback));
    }
}

// =============================================================
// InputField
// =============================================================

#[derive(Default)]
pub struct TextInput {
    pub text: RefCell<String>,
}

impl TextInput {
    pub fn with(text: &str) -> Rc<Self> {
        Rc::new(Self { text: RefCell::new(text.to_owned()) })
    }
}

impl InputField for TextInput {
    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn clear(&self) {
        self.text.borrow_mut().clear();
    }
}

// =============================================================
// Harness
// =============================================================

/// A console wired to doubles, with handles kept for assertions.
pub struct Harness {
    pub api: Rc<FakeApi>,
    pub channels: Rc<FakeChannels>,
    pub tokens: Rc<MemoryTokens>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub timers: Rc<ManualTimers>,
    pub inputs: Vec<(ChannelId, Rc<TextInput>)>,
    pub app: ConsoleApp,
}

impl Harness {
    pub fn new(api: FakeApi, channels: FakeChannels, tokens: MemoryTokens) -> Self {
        let api = Rc::new(api);
        let channels = Rc::new(channels);
        let tokens = Rc::new(tokens);
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let timers = Rc::new(ManualTimers::default());
        timers.now.set(1_700_000_000_000.0);

        let inputs: Vec<(ChannelId, Rc<TextInput>)> =
            ChannelId::ALL.into_iter().map(|c| (c, Rc::new(TextInput::default()))).collect();
        let bindings = inputs
            .iter()
            .fold(ViewBindings::new(), |b, (c, input)| b.bind(*c, Rc::clone(input) as Rc<dyn InputField>));

        let deps = ConsoleDeps {
            api: Rc::clone(&api) as Rc<dyn ApiClient>,
            channels: Rc::clone(&channels) as Rc<dyn ChannelManager>,
            tokens: Rc::clone(&tokens) as Rc<dyn TokenStore>,
            navigator: Rc::clone(&navigator) as Rc<dyn Navigator>,
            notifier: Rc::clone(&notifier) as Rc<dyn Notifier>,
            timers: Rc::clone(&timers) as Rc<dyn Timers>,
        };
        let app = ConsoleApp::new(ConsoleConfig::default(), deps, bindings);

        Self { api, channels, tokens, navigator, notifier, timers, inputs, app }
    }

    /// Authenticated console with default doubles.
    pub fn signed_in() -> Self {
        Self::new(FakeApi::accepting(), FakeChannels::default(), MemoryTokens::with("tok-123"))
    }

    pub fn input(&self, channel: ChannelId) -> &TextInput {
        self.inputs
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, input)| input.as_ref())
            .expect("every channel is bound in the harness")
    }

    pub fn type_into(&self, channel: ChannelId, text: &str) {
        *self.input(channel).text.borrow_mut() = text.to_owned();
    }
}
