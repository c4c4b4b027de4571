//! Home view - search, pagination and the notes grid

use dioxus::prelude::*;

use notehub_core::models::Note;
use notehub_core::pagination::should_paginate;

use crate::components::{
    Button, ButtonVariant, ErrorMessage, Loader, NoteList, Pagination, SearchBox,
};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let browse = state.browse.read().clone();
    let (loading, error, notes, empty, total_pages, placeholder) = {
        let query = state.query.read();
        let view = query.view();
        (
            view.loading,
            view.error.map(ToString::to_string),
            view.notes.map(<[Note]>::to_vec),
            view.empty,
            query.total_pages(),
            query.is_placeholder(),
        )
    };
    // Previous results stay visible, dimmed, until the new page arrives
    let list_opacity = if placeholder { "0.6" } else { "1" };

    rsx! {
        div {
            class: "home-container",
            style: "max-width: 1200px; margin: 0 auto; padding: 24px;",

            header {
                class: "toolbar",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    flex-wrap: wrap;
                    margin-bottom: 24px;
                ",

                SearchBox {
                    value: browse.search().to_string(),
                    on_change: move |value: String| state.type_search(value),
                }

                if should_paginate(total_pages) {
                    Pagination {
                        total_pages,
                        current_page: browse.page(),
                        on_page_change: move |page| state.select_page(page),
                    }
                }

                div { style: "flex: 1;" }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| state.open_modal(),
                    "Create note +"
                }
            }

            main {
                if loading {
                    Loader {}
                }

                if let Some(message) = error {
                    ErrorMessage { message }
                }

                if let Some(notes) = notes {
                    div {
                        style: "opacity: {list_opacity}; transition: opacity 0.15s;",
                        NoteList { notes }
                    }
                }

                if empty {
                    p {
                        class: "no-results",
                        style: "text-align: center; padding: 32px; color: {colors.text_muted};",
                        "No notes found. Try changing your search query or creating a new note."
                    }
                }
            }
        }
    }
}
