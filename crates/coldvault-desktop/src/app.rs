//! Main application component

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;

use coldvault_core::config::{default_config_path, AppConfig};
use coldvault_core::{Action, MessageChannel, Store};

use crate::components::TopBar;
use crate::simulator;
use crate::state::AppState;
use crate::theme::resolve_theme;
use crate::views::{Home, LockedScreen, SettingsView};

/// Load the config and the path it may be saved to.
///
/// The path is withheld when the config cannot safely be written back.
fn load_config() -> (AppConfig, Option<PathBuf>) {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{}. Settings will not be saved.", e);
            return (AppConfig::default(), None);
        }
    };
    let (config, writable) = AppConfig::load_or_default(&path);
    (config, writable.then_some(path))
}

/// Root application component
#[component]
pub fn App() -> Element {
    let (initial_config, initial_path) = use_hook(load_config);
    let config = use_signal(|| initial_config);
    let config_path = use_signal(|| initial_path);
    let store = use_signal(|| Store::from_config(&config.peek()));
    let theme = use_signal(|| resolve_theme(config.peek().theme));
    let search_query = use_signal(String::new);
    let settings_open = use_signal(|| false);
    let channel = use_context_provider(MessageChannel::default);

    let state = use_context_provider(|| AppState {
        store,
        config,
        config_path,
        theme,
        search_query,
        settings_open,
    });

    use_future(move || {
        let channel = channel.clone();
        let config = config.peek().clone();
        async move {
            if config.simulate_sync {
                simulator::run(channel, Duration::from_millis(config.simulate_interval_ms)).await;
            }
        }
    });

    let colors = theme().palette();
    let locked = store.read().is_locked();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/app.css") }

        div {
            class: "app-container",
            "data-theme": theme().attr(),
            style: "
                min-height: 100vh;
                position: relative;
                font-family: 'Open Sans', system-ui, -apple-system, sans-serif;
                background: {colors.cream};
                color: {colors.dark};
                --light-fog: {colors.light_fog};
            ",

            TopBar {}

            div {
                class: "main-content",
                style: "padding-top: {colors.top_bar_height}px;",

                if settings_open() {
                    SettingsView {}
                } else {
                    Home {}
                }
            }

            if locked {
                LockedScreen {
                    on_unlock: move |_| state.dispatch(Action::Unlock),
                }
            }
        }
    }
}
