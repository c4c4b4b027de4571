//! Main application component

use std::rc::Rc;

use dioxus::prelude::*;

use notehub_core::gateway::HttpNotesGateway;
use notehub_core::overlay::KeyRouter;

use crate::client_config;
use crate::components::{Modal, NoteForm, Toaster};
use crate::effects::{forward_global_keys, remove_global_key_listener};
use crate::state::{use_app_state, use_notes_sync, SharedGateway};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = client_config();

    let state = use_app_state(config, || match HttpNotesGateway::new(config) {
        Ok(gateway) => Some(Rc::new(gateway) as SharedGateway),
        Err(e) => {
            tracing::error!("Failed to initialize notes gateway: {}", e);
            None
        }
    });
    let key_router = use_context_provider(KeyRouter::new);

    // Fetch whenever the query key changes or the query is invalidated
    use_notes_sync(state);

    // Single window-level key listener, routed to whoever subscribed
    use_future(move || forward_global_keys(key_router.clone()));
    use_drop(remove_global_key_listener);

    let current_theme = (state.theme)();
    let colors = current_theme.palette();
    let theme_attr = current_theme.attr();
    let modal_open = state.browse.read().is_modal_open();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            Home {}

            // Overlay layer, attached to the root rather than the page content
            div {
                id: "modal-root",
                if modal_open {
                    Modal {
                        on_close: move |()| state.close_modal(),
                        NoteForm { on_close: move |()| state.close_modal() }
                    }
                }
            }

            Toaster {}
        }
    }
}
