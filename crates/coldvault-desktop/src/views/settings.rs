//! Settings view built from settings sections

use dioxus::prelude::*;

use coldvault_core::layout::{Align, Justify};
use coldvault_core::Action;

use crate::components::settings::{
    SettingsSection, SettingsSectionBody, SettingsSectionHeader, SettingsSectionRow,
};
use crate::components::{Flex, IconDevices, IconLock};
use crate::state::AppState;

#[component]
pub fn SettingsView() -> Element {
    let state = use_context::<AppState>();
    let mut settings_open = state.settings_open;
    let colors = (state.theme)().palette();
    let theme_mode = state.config.read().theme;
    let has_password = state.has_password();
    let password_status = if has_password { "Enabled" } else { "Not set" };

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
                    "Settings"
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
                    onclick: move |_| settings_open.set(false),
                    "Back"
                }
            }

            SettingsSection {
                SettingsSectionHeader {
                    title: "Display",
                    desc: "Appearance of the application",
                    icon: rsx! { IconDevices { size: 16.0 } },
                }
                SettingsSectionBody {
                    SettingsSectionRow {
                        title: "Theme",
                        desc: "Click to switch between light, dark and system",
                        onclick: move |_| state.set_theme_mode(theme_mode.next()),
                        span { "{theme_mode.label()}" }
                    }
                }
            }

            SettingsSection {
                SettingsSectionHeader {
                    title: "Security",
                    desc: "Password and application lock",
                    icon: rsx! { IconLock { size: 16.0 } },
                }
                SettingsSectionBody {
                    SettingsSectionRow {
                        title: "Password",
                        desc: "Required to unlock the application",
                        span { "{password_status}" }
                    }
                    if has_password {
                        SettingsSectionRow {
                            title: "Lock application",
                            desc: "Hide your accounts until the password is entered",
                            onclick: move |_| state.dispatch(Action::Lock),
                        }
                    } else {
                        SettingsSectionRow {
                            title: "Lock application",
                            desc: "Set a password to enable locking",
                        }
                    }
                }
            }
        }
    }
}
