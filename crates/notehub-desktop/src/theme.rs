//! Theme configuration for the desktop app

use notehub_core::config::ThemeMode;

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl From<ThemeMode> for ResolvedTheme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
        }
    }
}

impl ResolvedTheme {
    /// Value for the `data-theme` attribute
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub backdrop: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    bg_tertiary: "#eef1f4",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#0d6efd",
    accent_text: "#ffffff",
    backdrop: "rgba(0, 0, 0, 0.5)",
    error: "#dc2626",
    success: "#16a34a",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    bg_tertiary: "#2d2d2d",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#6ea8fe",
    accent_text: "#1a1a1a",
    backdrop: "rgba(0, 0, 0, 0.7)",
    error: "#f87171",
    success: "#4ade80",
};
