//! Loading indicator

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Loader() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        p {
            class: "loader",
            role: "status",
            style: "text-align: center; padding: 16px; color: {colors.text_secondary};",
            "Loading notes, please wait..."
        }
    }
}
