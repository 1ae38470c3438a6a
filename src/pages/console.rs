//! Agent console page: channel tabs, the active channel's panel, and the
//! session header.

use leptos::prelude::*;

use crate::components::channel_composer::ChannelComposer;
use crate::components::channel_tabs::ChannelTabs;
use crate::components::conversation::ConversationView;
use crate::console::ConsoleHandle;
use crate::state::channels::{ChannelId, ChannelState};
use crate::state::session::SessionState;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let channels = expect_context::<RwSignal<ChannelState>>();
    let console = use_context::<ConsoleHandle>();

    let on_logout = move |_| {
        if let Some(console) = console {
            let app = console.get_value();
            leptos::task::spawn_local(async move {
                app.logout().await;
            });
        }
    };

    let panel_class = move |channel: ChannelId| {
        move || {
            if channels.get().current == channel {
                "channel-panel"
            } else {
                "channel-panel hidden"
            }
        }
    };

    view! {
        <div class="console-page">
            <header class="console-header">
                <h1>"Agent Console"</h1>
                <span class="console-header__agent">
                    {move || if session.get().loading { "Signing in...".to_owned() } else { session.get().display_name() }}
                </span>
                <button class="btn console-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            <ChannelTabs/>

            <section class=panel_class(ChannelId::Chat)>
                <ConversationView/>
                <ChannelComposer channel=ChannelId::Chat placeholder="Type a message..."/>
            </section>
            <section class=panel_class(ChannelId::Email)>
                <ChannelComposer channel=ChannelId::Email placeholder="Write an email reply..."/>
            </section>
            <section class=panel_class(ChannelId::Social)>
                <ChannelComposer channel=ChannelId::Social placeholder="Reply on social..."/>
            </section>
            <section class=panel_class(ChannelId::Web)>
                <ChannelComposer channel=ChannelId::Web placeholder="Respond to the web form..."/>
            </section>
        </div>
    }
}
