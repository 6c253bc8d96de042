//! Home view - accounts overview

use dioxus::prelude::*;

use coldvault_core::layout::{Align, Justify};

use crate::components::{Card, Flex, IconCurrencies};
use crate::state::AppState;

/// Accounts list filtered by the top bar search
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let mut settings_open = state.settings_open;
    let colors = (state.theme)().palette();
    let accounts = state.filtered_accounts();
    let has_accounts = state.has_accounts();

    rsx! {
        Flex {
            p: 6,
            flow: 4,

            Flex {
                horizontal: true,
                justify: Justify::SpaceBetween,
                align: Align::Center,
                h2 {
                    style: "margin: 0; font-size: 18px; color: {colors.dark};",
                    "Accounts"
                }
                button {
                    style: "
                        padding: 6px 14px;
                        border: 1px solid {colors.mouse};
                        border-radius: 4px;
                        background: {colors.white};
                        color: {colors.dark};
                        cursor: pointer;
                    ",
                    onclick: move |_| settings_open.set(true),
                    "Settings"
                }
            }

            if !has_accounts {
                Card {
                    span {
                        style: "color: {colors.grey};",
                        "No accounts yet. Add accounts to the config file to see them here."
                    }
                }
            } else if accounts.is_empty() {
                Card {
                    span {
                        style: "color: {colors.grey};",
                        "No accounts match your search."
                    }
                }
            }

            for account in accounts {
                Card {
                    key: "{account.id}",
                    Flex {
                        horizontal: true,
                        align: Align::Center,
                        flow: 2,
                        color: "wallet",
                        IconCurrencies { size: 16.0 }
                        span {
                            style: "flex-grow: 1; color: {colors.dark}; font-weight: 600;",
                            "{account.name}"
                        }
                        span {
                            style: "color: {colors.grey};",
                            "{account.currency}"
                        }
                    }
                }
            }
        }
    }
}
