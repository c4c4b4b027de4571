//! Modal overlay

use std::rc::Rc;

use dioxus::prelude::*;

use notehub_core::overlay::{BackdropPress, KeyRouter, KeySubscription, ScrollLock};

use crate::effects::DocumentEffects;
use crate::state::AppState;

/// Resources a mounted modal holds; released when the scope drops its hooks.
struct ModalGuards {
    _escape: KeySubscription,
    _scroll: ScrollLock<DocumentEffects>,
}

/// Dialog layer above the page.
///
/// Never closes itself: Escape and clicks that both start and end on the
/// backdrop only call `on_close`, and the host decides.
#[component]
pub fn Modal(on_close: EventHandler<()>, children: Element) -> Element {
    let state = use_context::<AppState>();
    let router = use_context::<KeyRouter>();
    let colors = (state.theme)().palette();
    let mut press = use_signal(BackdropPress::default);

    use_hook(move || {
        Rc::new(ModalGuards {
            _escape: router.on_escape(move || on_close.call(())),
            _scroll: ScrollLock::acquire(DocumentEffects::current()),
        })
    });

    rsx! {
        div {
            class: "modal-backdrop",
            role: "dialog",
            "aria-modal": "true",
            style: "
                position: fixed;
                inset: 0;
                z-index: 1000;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.backdrop};
            ",
            onmousedown: move |_| press.write().press_on_backdrop(),
            onclick: move |_| {
                if press.write().click() {
                    on_close.call(());
                }
            },

            div {
                class: "modal",
                style: "
                    width: min(560px, 92vw);
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 24px;
                    border-radius: 8px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
                ",
                // Presses and clicks inside the dialog never reach the backdrop
                onmousedown: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    press.write().press_in_dialog();
                },
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
