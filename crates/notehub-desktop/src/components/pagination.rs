//! Pagination control

use dioxus::prelude::*;

use notehub_core::pagination::{page_indicators, PageIndex};

use crate::state::AppState;

/// Page indicators plus previous/next arrows.
///
/// Page indices are 0-based; labels shown to the user are 1-based. Hidden
/// page ranges of a long list show as an ellipsis.
#[component]
pub fn Pagination(
    total_pages: u32,
    current_page: PageIndex,
    on_page_change: EventHandler<PageIndex>,
) -> Element {
    let previous = current_page.previous();
    let next = current_page.next(total_pages);

    rsx! {
        nav {
            class: "pagination",
            "aria-label": "Pagination",
            style: "display: flex; gap: 4px; align-items: center;",

            PageButton {
                label: "←".to_string(),
                active: false,
                disabled: previous.is_none(),
                onclick: move |()| {
                    if let Some(page) = previous {
                        on_page_change.call(page);
                    }
                },
            }

            for indicator in page_indicators(total_pages, current_page) {
                {
                    let index = indicator.index;
                    let active = indicator.active;
                    let label = index.to_string();
                    let gap_before = indicator.gap_before;

                    rsx! {
                        span {
                            key: "{label}",
                            style: "display: contents;",
                            if gap_before {
                                span {
                                    class: "page-gap",
                                    "aria-hidden": "true",
                                    style: "padding: 0 4px;",
                                    "…"
                                }
                            }
                            PageButton {
                                label: label.clone(),
                                active,
                                disabled: false,
                                onclick: move |()| {
                                    if !active {
                                        on_page_change.call(index);
                                    }
                                },
                            }
                        }
                    }
                }
            }

            PageButton {
                label: "→".to_string(),
                active: false,
                disabled: next.is_none(),
                onclick: move |()| {
                    if let Some(page) = next {
                        on_page_change.call(page);
                    }
                },
            }
        }
    }
}

#[component]
fn PageButton(label: String, active: bool, disabled: bool, onclick: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let (background, color) = if active {
        (colors.accent, colors.accent_text)
    } else {
        (colors.bg_primary, colors.text_primary)
    };
    let cursor = if disabled { "default" } else { "pointer" };

    rsx! {
        button {
            r#type: "button",
            class: if active { "page-indicator active" } else { "page-indicator" },
            "aria-current": if active { "page" } else { "false" },
            disabled,
            style: "
                min-width: 32px;
                padding: 6px 10px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                background: {background};
                color: {color};
                cursor: {cursor};
            ",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
