//! Stack of transient notifications.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders every live toast. Removal is driven by the notifier's timers.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let class = toast.class();
                        view! { <div class=class role="status">{toast.message}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
