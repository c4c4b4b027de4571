//! NoteHub Desktop Application
//!
//! Browse, search and create notes stored by the NoteHub service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod effects;
mod state;
mod theme;
mod views;

use std::sync::OnceLock;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use notehub_core::config::ClientConfig;

/// Configuration resolved once at startup
static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Configuration for the running app
pub fn client_config() -> &'static ClientConfig {
    CLIENT_CONFIG.get_or_init(ClientConfig::default)
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notehub=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting NoteHub...");

    let config = ClientConfig::from_env().unwrap_or_else(|error| {
        tracing::error!("Invalid configuration, using defaults: {}", error);
        ClientConfig::default()
    });
    tracing::info!(
        api = %config.api_base_url,
        per_page = config.per_page,
        "Notes gateway configured"
    );
    let _ = CLIENT_CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("NoteHub")
        .with_inner_size(LogicalSize::new(1100.0, 760.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
