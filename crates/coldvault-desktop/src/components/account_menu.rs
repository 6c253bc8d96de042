//! Account dropdown on the right of the top bar

use dioxus::prelude::*;

use coldvault_core::layout::Align;

use super::icons::IconAngleDown;
use super::layout::Flex;
use crate::state::AppState;

/// Placeholder entries until account actions exist
const MENU_ITEMS: &[(&str, &str)] = &[("empty", "Nothing here yet")];

/// Display name with a dropdown of account actions
#[component]
pub fn AccountMenu(#[props(into)] name: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut open = use_signal(|| false);

    rsx! {
        div {
            style: "position: relative; display: flex; align-items: center; cursor: pointer;",
            onclick: move |_| open.toggle(),

            Flex {
                horizontal: true,
                align: Align::Center,
                flow: 1,
                color: "warmGrey",
                style: "font-weight: 600; font-size: 13px;",
                span { "{name}" }
                IconAngleDown { size: 8.0 }
            }

            if open() {
                div {
                    style: "
                        position: absolute;
                        top: 100%;
                        right: 0;
                        min-width: 160px;
                        padding: 5px 0;
                        background: {colors.white};
                        border: 1px solid {colors.light_fog};
                        border-radius: 4px;
                        box-shadow: 0 4px 8px 0 rgba(0, 0, 0, 0.1);
                        z-index: 30;
                    ",
                    for (key, label) in MENU_ITEMS.iter() {
                        div {
                            key: "{key}",
                            class: "account-menu-item",
                            style: "padding: 8px 15px; color: {colors.dark}; font-size: 13px;",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
