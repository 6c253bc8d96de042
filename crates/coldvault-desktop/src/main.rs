//! Coldvault Desktop Application
//!
//! Desktop shell: top bar with sync status and lock control, accounts
//! overview and settings.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod simulator;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coldvault=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Coldvault...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Coldvault")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
