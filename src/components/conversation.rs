//! Message history of the active channel.

use leptos::prelude::*;

use crate::state::channels::{ChannelState, Sender};

#[component]
pub fn ConversationView() -> impl IntoView {
    let channels = expect_context::<RwSignal<ChannelState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = channels.get().render_revision;

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let awaiting_reply = move || channels.get().insight.is_some_and(|i| i.awaiting_reply);

    view! {
        <div class="conversation" node_ref=messages_ref>
            {move || {
                let state = channels.get();
                let messages = state.conversation(state.current).to_vec();
                if messages.is_empty() {
                    return view! { <div class="conversation__empty">"No messages yet"</div> }.into_any();
                }

                messages
                    .into_iter()
                    .map(|msg| {
                        let class = match msg.sender {
                            Sender::Agent => "conversation__message conversation__message--agent",
                            Sender::Customer => "conversation__message conversation__message--customer",
                            Sender::System => "conversation__message conversation__message--system",
                        };
                        view! { <div class=class>{msg.text}</div> }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            <Show when=awaiting_reply>
                <div class="conversation__hint">"Customer is waiting for a reply"</div>
            </Show>
        </div>
    }
}
