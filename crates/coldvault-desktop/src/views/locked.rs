//! Overlay shown while the store is locked

use dioxus::prelude::*;

use coldvault_core::layout::{Align, Justify};

use crate::components::{Flex, IconLock};
use crate::state::AppState;

#[component]
pub fn LockedScreen(on_unlock: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        Flex {
            align: Align::Center,
            justify: Justify::Center,
            flow: 4,
            bg: "cream",
            color: "night",
            style: "position: absolute; inset: 0; z-index: 50;",

            IconLock { size: 48.0 }
            span {
                style: "font-size: 16px; color: {colors.dark};",
                "Application locked"
            }
            button {
                style: "
                    padding: 6px 14px;
                    border: none;
                    border-radius: 4px;
                    background: {colors.wallet};
                    color: #ffffff;
                    cursor: pointer;
                ",
                onclick: move |event| on_unlock.call(event),
                "Unlock"
            }
        }
    }
}
