//! Toast notifications, stacked in the top-right corner

use dioxus::prelude::*;

use notehub_core::toast::{Toast, ToastKind};

use crate::state::AppState;

/// Renders every queued toast, oldest first
#[component]
pub fn Toaster() -> Element {
    let state = use_context::<AppState>();
    let toasts = state.toasts.read().toasts().to_vec();

    rsx! {
        div {
            class: "toaster",
            "aria-live": "polite",
            style: "
                position: fixed;
                top: 16px;
                right: 16px;
                z-index: 2000;
                display: flex;
                flex-direction: column;
                gap: 8px;
                pointer-events: none;
            ",

            for toast in toasts {
                {
                    let toast_id = toast.id;

                    rsx! {
                        ToastItem { key: "{toast_id}", toast }
                    }
                }
            }
        }
    }
}

/// One toast; dismisses itself once its time is up
#[component]
fn ToastItem(toast: Toast) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut toasts = state.toasts;

    let id = toast.id;
    let ttl = toast.ttl;
    use_future(move || async move {
        tokio::time::sleep(ttl).await;
        toasts.write().dismiss(id);
    });

    let (accent, icon) = match toast.kind {
        ToastKind::Success => (colors.success, "✓"),
        ToastKind::Error => (colors.error, "✕"),
    };

    rsx! {
        div {
            class: "toast",
            role: "status",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                min-width: 220px;
                max-width: 360px;
                padding: 10px 14px;
                border-left: 4px solid {accent};
                border-radius: 6px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                pointer-events: auto;
            ",
            span { style: "color: {accent}; font-weight: 700;", "{icon}" }
            span { "{toast.message}" }
        }
    }
}
