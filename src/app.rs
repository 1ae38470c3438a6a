//! Root application component and console wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::channel_composer::ChannelInputs;
use crate::components::toast_stack::ToastStack;
use crate::pages::console::ConsolePage;
use crate::state::channels::ChannelState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides shared state contexts and, in the browser, builds and starts the
/// console.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let channels = RwSignal::new(ChannelState::default());
    let toasts = RwSignal::new(ToastState::default());
    let inputs = ChannelInputs::new();

    provide_context(session);
    provide_context(channels);
    provide_context(toasts);
    provide_context(inputs);

    #[cfg(feature = "csr")]
    start_console(session, channels, toasts, inputs);

    view! {
        <Title text="Agent Console"/>
        <ConsolePage/>
        <ToastStack/>
    }
}

#[cfg(feature = "csr")]
fn start_console(
    session: RwSignal<SessionState>,
    channels: RwSignal<ChannelState>,
    toasts: RwSignal<ToastState>,
    inputs: ChannelInputs,
) {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::browser::{navigation::WindowNavigator, storage::LocalStorageTokens, timers::BrowserTimers};
    use crate::config::ConsoleConfig;
    use crate::console::notify::ToastNotifier;
    use crate::console::ports::{ApiClient, ChannelManager, InputField, Navigator, Notifier, TokenStore, Timers};
    use crate::console::{ConsoleApp, ConsoleDeps, ViewBindings};
    use crate::net::api::HttpApiClient;
    use crate::state::channels::ChannelId;

    let config = ConsoleConfig::from_document();
    let timers: Rc<dyn Timers> = Rc::new(BrowserTimers);
    let notifier = ToastNotifier::new(toasts, Rc::clone(&timers), Duration::from_millis(u64::from(config.toast_ttl_ms)));

    let deps = ConsoleDeps {
        api: Rc::new(HttpApiClient::new(&config)) as Rc<dyn ApiClient>,
        channels: Rc::new(channels) as Rc<dyn ChannelManager>,
        tokens: Rc::new(LocalStorageTokens::new(config.token_key.clone())) as Rc<dyn TokenStore>,
        navigator: Rc::new(WindowNavigator) as Rc<dyn Navigator>,
        notifier: Rc::new(notifier) as Rc<dyn Notifier>,
        timers,
    };
    let bindings = ChannelId::ALL
        .into_iter()
        .fold(ViewBindings::new(), |b, c| b.bind(c, Rc::new(inputs.get(c)) as Rc<dyn InputField>));

    let app = Rc::new(ConsoleApp::new(config, deps, bindings));
    provide_context(StoredValue::new_local(Rc::clone(&app)));

    leptos::task::spawn_local(async move {
        let started = app.init().await.is_ok();
        if started {
            crate::browser::events::listen(app.bus());
        }
        session.set(SessionState { user: app.user(), loading: !started });
    });
}
