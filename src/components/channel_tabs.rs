//! Channel switcher with unread badges.

use leptos::prelude::*;

use crate::console::ConsoleHandle;
use crate::state::channels::{ChannelId, ChannelState};

#[component]
pub fn ChannelTabs() -> impl IntoView {
    let channels = expect_context::<RwSignal<ChannelState>>();
    let console = use_context::<ConsoleHandle>();

    let tabs = ChannelId::ALL
        .into_iter()
        .map(|channel| {
            let is_active = move || channels.get().current == channel;
            let badge = move || channels.get().badge(channel);
            let tab_class = move || {
                if is_active() {
                    "channel-tab channel-tab--active"
                } else {
                    "channel-tab"
                }
            };
            let on_click = move |_| {
                if let Some(console) = console {
                    console.with_value(|app| app.switch_channel(channel));
                }
            };

            view! {
                <button class=tab_class on:click=on_click>
                    <span class="channel-tab__label">{channel.label()}</span>
                    <span
                        id=channel.badge_id()
                        class="channel-tab__badge"
                        class:hidden=move || badge() == 0
                    >
                        {badge}
                    </span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="channel-tabs">{tabs}</nav> }
}
