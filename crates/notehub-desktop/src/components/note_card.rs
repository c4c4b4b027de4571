//! Note card component

use dioxus::prelude::*;

use notehub_core::models::Note;

use crate::state::AppState;

const PREVIEW_LEN: usize = 240;

/// A single note rendered in the note list.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let title = note.title.clone();
    let preview = note.content_preview(PREVIEW_LEN);
    let created = note.created_label();
    let datetime = note.created_at.to_rfc3339();
    let tag = note.tag;

    rsx! {
        li {
            class: "note-item",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
            ",

            h2 {
                class: "note-title",
                style: "
                    margin: 0;
                    font-size: 16px;
                    font-weight: 600;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    color: {colors.text_primary};
                ",
                "{title}"
            }

            p {
                class: "note-content",
                style: "
                    margin: 0;
                    flex: 1;
                    white-space: pre-wrap;
                    color: {colors.text_secondary};
                ",
                "{preview}"
            }

            div {
                class: "note-footer",
                style: "display: flex; justify-content: space-between; align-items: center; font-size: 12px;",

                if let Some(tag) = tag {
                    span {
                        class: "note-tag",
                        style: "
                            padding: 2px 8px;
                            border-radius: 999px;
                            background: {colors.bg_tertiary};
                            color: {colors.text_primary};
                        ",
                        "{tag}"
                    }
                } else {
                    span {}
                }

                time {
                    datetime: "{datetime}",
                    style: "color: {colors.text_muted};",
                    "{created}"
                }
            }
        }
    }
}
