//! Note list component

use dioxus::prelude::*;

use notehub_core::models::Note;

use super::NoteCard;

/// Grid of read-only note cards. An empty slice renders nothing.
#[component]
pub fn NoteList(notes: Vec<Note>) -> Element {
    if notes.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            class: "note-list",
            style: "
                list-style: none;
                margin: 0;
                padding: 0;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                gap: 16px;
            ",

            for note in notes {
                {
                    let note_id = note.id.clone();

                    rsx! {
                        NoteCard { key: "{note_id}", note }
                    }
                }
            }
        }
    }
}
