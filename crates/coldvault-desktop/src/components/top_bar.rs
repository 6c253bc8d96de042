//! Top application bar: search, device and sync activity icons, lock
//! control and the account dropdown.

use dioxus::prelude::*;

use coldvault_core::color::rgba;
use coldvault_core::layout::{Align, Justify};
use coldvault_core::top_bar::TopBarView;
use coldvault_core::{Action, MessageChannel, SyncIndicator};

use super::account_menu::AccountMenu;
use super::icons::{IconActivity, IconDevices, IconLock};
use super::layout::Flex;
use super::search_bar::GlobalSearch;
use crate::state::AppState;

/// Fixed bar at the top of the window
#[component]
pub fn TopBar() -> Element {
    let state = use_context::<AppState>();
    let channel = use_context::<MessageChannel>();
    let mut sync = use_signal(SyncIndicator::new);

    // The subscription lives inside this task; unmounting the bar cancels
    // the task and drops it, which releases the listener.
    use_future(move || {
        let mut subscription = channel.subscribe();
        async move {
            while let Some(message) = subscription.next().await {
                sync.write().apply(message);
            }
        }
    });

    let colors = (state.theme)().palette();
    let view = TopBarView::from_store(&state.store.read(), &sync.read());
    let status = sync.read().status();
    let border = rgba(colors.black, 0.15).unwrap_or_else(|e| {
        tracing::warn!("Invalid border color: {}", e);
        colors.mouse.to_string()
    });
    let display_name = state.config.read().display_name.clone();

    rsx! {
        Flex {
            px: 6,
            bg: "cream",
            color: "warmGrey",
            style: format!(
                "height: {}px; position: absolute; left: 0; right: 0; top: 0; z-index: 20;",
                colors.top_bar_height
            ),

            Flex {
                horizontal: true,
                grow: true,
                border_bottom: border,

                Flex {
                    horizontal: true,
                    grow: true,
                    flow: 4,

                    GlobalSearch {}

                    Flex {
                        justify: Justify::Center,
                        IconDevices { size: 16.0 }
                    }

                    Flex {
                        justify: Justify::Center,
                        relative: true,
                        IconActivity { size: 16.0 }
                        if let Some(dot) = view.indicator {
                            div {
                                class: "sync-indicator",
                                title: status.label(),
                                style: "
                                    background: {colors.dot(dot)};
                                    border-radius: 50%;
                                    bottom: 20px;
                                    height: 4px;
                                    position: absolute;
                                    right: -2px;
                                    width: 4px;
                                ",
                            }
                        }
                    }

                    Flex {
                        justify: Justify::Center,
                        div {
                            style: "height: 15px; width: 1px; background: {colors.mouse};",
                        }
                    }

                    Flex {
                        horizontal: true,
                        justify: Justify::End,
                        if view.show_lock {
                            LockControl {
                                on_lock: move |_| state.dispatch(Action::Lock),
                            }
                        }
                    }
                }

                Flex {
                    horizontal: true,
                    no_shrink: true,
                    align: Align::Center,
                    AccountMenu { name: display_name }
                }
            }
        }
    }
}

/// Padlock button that asks the store to lock the application
#[component]
fn LockControl(on_lock: EventHandler<MouseEvent>) -> Element {
    rsx! {
        Flex {
            class: "lock-control",
            horizontal: true,
            relative: true,
            align: Align::Center,
            color: "night",
            mr: 20,
            style: "cursor: pointer;",
            onclick: on_lock,
            IconLock { size: 20.0 }
        }
    }
}
