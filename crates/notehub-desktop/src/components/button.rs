//! Button primitive

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ColorPalette;

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn style(self, colors: &ColorPalette) -> String {
        match self {
            Self::Primary => format!(
                "background: {}; color: {}; border: 1px solid {};",
                colors.accent, colors.accent_text, colors.accent
            ),
            Self::Secondary => format!(
                "background: {}; color: {}; border: 1px solid {};",
                colors.bg_primary, colors.text_primary, colors.border
            ),
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let variant_style = variant.style(colors);
    let opacity = if disabled { "0.55" } else { "1" };

    rsx! {
        button {
            r#type: "button",
            disabled,
            style: "
                {variant_style}
                padding: 8px 16px;
                border-radius: 6px;
                font-size: 14px;
                font-weight: 500;
                cursor: pointer;
                opacity: {opacity};
            ",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}
