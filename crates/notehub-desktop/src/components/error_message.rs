//! Inline error region for a failed notes fetch

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn ErrorMessage(message: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        p {
            class: "error-message",
            role: "alert",
            style: "text-align: center; padding: 16px; color: {colors.error};",
            "There was an error, please try again... {message}"
        }
    }
}
