//! Box and card layout primitives.
//!
//! Color props take palette names (`"cream"`, `"warmGrey"`, ...) or raw CSS
//! colors; spacing props are steps on the shared spacing scale.

use dioxus::prelude::*;

use coldvault_core::layout::{Align, BoxStyle, Justify};

use crate::state::AppState;

/// Flex container
#[component]
pub fn Flex(
    #[props(default)] horizontal: bool,
    align: Option<Align>,
    justify: Option<Justify>,
    #[props(default)] grow: bool,
    #[props(default)] no_shrink: bool,
    flow: Option<u32>,
    p: Option<u32>,
    px: Option<u32>,
    py: Option<u32>,
    mr: Option<u32>,
    bg: Option<&'static str>,
    color: Option<&'static str>,
    #[props(default)] relative: bool,
    border_bottom: Option<String>,
    #[props(default, into)] class: String,
    #[props(default, into)] style: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let box_style = BoxStyle {
        horizontal,
        align,
        justify,
        grow,
        no_shrink,
        flow,
        p,
        px,
        py,
        mr,
        bg: bg.map(|name| colors.resolve(name).to_string()),
        color: color.map(|name| colors.resolve(name).to_string()),
        relative,
        border_bottom,
    };
    let mut css = box_style.to_css();
    if !style.is_empty() {
        css.push(' ');
        css.push_str(&style);
    }

    rsx! {
        div {
            class: "{class}",
            style: "{css}",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}

/// Raised container with rounded corners
#[component]
pub fn Card(
    #[props(default = 3)] p: u32,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let css = BoxStyle::default().p(p).bg(colors.white).to_css();

    rsx! {
        div {
            class: "{class}",
            style: "{css} border-radius: 4px; box-shadow: 0 4px 8px 0 rgba(0, 0, 0, 0.05);",
            {children}
        }
    }
}
