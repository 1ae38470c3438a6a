//! Per-channel text input bound to a send action.

use leptos::prelude::*;

use crate::console::{ConsoleHandle, is_submit_key};
use crate::state::channels::ChannelId;

/// Input signals for every channel, provided via context and handed to the
/// console as its view bindings.
#[derive(Clone, Copy)]
pub struct ChannelInputs {
    chat: RwSignal<String>,
    email: RwSignal<String>,
    social: RwSignal<String>,
    web: RwSignal<String>,
}

impl ChannelInputs {
    pub fn new() -> Self {
        Self {
            chat: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            social: RwSignal::new(String::new()),
            web: RwSignal::new(String::new()),
        }
    }

    pub fn get(&self, channel: ChannelId) -> RwSignal<String> {
        match channel {
            ChannelId::Chat => self.chat,
            ChannelId::Email => self.email,
            ChannelId::Social => self.social,
            ChannelId::Web => self.web,
        }
    }
}

impl Default for ChannelInputs {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ChannelComposer(channel: ChannelId, #[prop(into)] placeholder: String) -> impl IntoView {
    let inputs = expect_context::<ChannelInputs>();
    let console = use_context::<ConsoleHandle>();
    let input = inputs.get(channel);

    let do_send = move || {
        if let Some(console) = console {
            let app = console.get_value();
            leptos::task::spawn_local(async move {
                app.send(channel).await;
            });
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="composer">
            <textarea
                id=channel.input_id()
                class="composer__input"
                placeholder=placeholder
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button class="btn btn--primary composer__send" on:click=move |_| do_send() disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
