use deal_core::PageSignal;
use leptos::prelude::*;

use crate::context::use_signal_bus;
use crate::hooks::ModalHandle;

/// Dialog chrome shared by every modal: backdrop, close button and title.
///
/// Clicking the backdrop, the close button or pressing Escape closes it.
#[component]
pub fn ModalShell(modal: ModalHandle, children: ChildrenFn) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                modal.close();
            }
        });
        on_cleanup(move || listener.remove());
    }

    let title_id = format!("{}-title", modal.id());

    view! {
        <Show when=move || modal.is_open()>
            <div class="modal-root">
                <div class="modal-backdrop" on:click=move |_| modal.close()></div>
                <div class="modal" role="dialog" aria-modal="true" aria-labelledby=title_id.clone()>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| modal.close()
                    >
                        "×"
                    </button>
                    <h2 id=title_id.clone()>{modal.id().title()}</h2>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// Button that broadcasts a page signal instead of owning any modal.
#[component]
pub fn SignalButton(
    signal: PageSignal,
    #[prop(into, default = "btn".to_string())] class: String,
    children: Children,
) -> impl IntoView {
    let bus = use_signal_bus();

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                bus.broadcast(signal);
            }
        >
            {children()}
        </button>
    }
}
