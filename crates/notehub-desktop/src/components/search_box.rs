//! Search box component

use dioxus::prelude::*;

use crate::state::AppState;

/// Free-text search input. Reports every keystroke; the caller debounces.
#[component]
pub fn SearchBox(value: String, on_change: EventHandler<String>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        input {
            class: "search-box",
            r#type: "text",
            placeholder: "Search notes",
            value: "{value}",
            oninput: move |evt| on_change.call(evt.value()),
            style: "
                width: 280px;
                padding: 8px 12px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                outline: none;
            ",
        }
    }
}
