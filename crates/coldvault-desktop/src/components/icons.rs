//! Vector icons.
//!
//! Each icon is a fixed drawing scaled to `size`; extra attributes are passed
//! straight through to the `svg` element. Sizes are not validated.

use dioxus::prelude::*;

const CURRENCIES_PATH: &str = "M8 5.581c-3.865 0-7-1.083-7-2.79C1 1.083 4.135 0 8 0s7 1.083 7 2.79c0 1.708-3.135 2.791-7 2.791zm-7-2.79c0-.309.241-.558.538-.558.298 0 .539.25.539.558v10.418c0 .28.516.704 1.517 1.05 1.142.396 2.714.625 4.406.625 1.692 0 3.264-.23 4.406-.625 1.001-.346 1.517-.77 1.517-1.05V2.791c0-.309.241-.558.539-.558.297 0 .538.25.538.558v10.418C15 14.921 11.88 16 8 16s-7-1.08-7-2.79V2.79zM13.923 8c0-.308.241-.558.539-.558.297 0 .538.25.538.558 0 1.711-3.12 2.79-7 2.79S1 9.712 1 8c0-.308.241-.558.538-.558.298 0 .539.25.539.558 0 .28.516.704 1.517 1.05 1.142.395 2.714.624 4.406.624 1.692 0 3.264-.229 4.406-.624 1.001-.346 1.517-.77 1.517-1.05zM8 4.465c1.682 0 3.254-.23 4.399-.625 1.004-.347 1.524-.772 1.524-1.05 0-.277-.52-.702-1.524-1.048-1.145-.396-2.717-.626-4.399-.626s-3.254.23-4.399.626c-1.004.346-1.524.771-1.524 1.049 0 .277.52.702 1.524 1.049 1.145.395 2.717.625 4.399.625z";

const LOCK_SHACKLE_PATH: &str = "M395.95 210.4h-7.1v-62.9c0-81.3-66.1-147.5-147.5-147.5-81.3 0-147.5 66.1-147.5 147.5 0 7.5 6 13.5 13.5 13.5s13.5-6 13.5-13.5c0-66.4 54-120.5 120.5-120.5 66.4 0 120.5 54 120.5 120.5v62.9h-275c-14.4 0-26.1 11.7-26.1 26.1v168.1c0 43.1 35.1 78.2 78.2 78.2h204.9c43.1 0 78.2-35.1 78.2-78.2V236.5c0-14.4-11.7-26.1-26.1-26.1zm-.9 194.2c0 28.2-22.9 51.2-51.2 51.2h-204.8c-28.2 0-51.2-22.9-51.2-51.2V237.4h307.2v167.2z";

const LOCK_KEYHOLE_PATH: &str = "M241.45 399.1c27.9 0 50.5-22.7 50.5-50.5 0-27.9-22.7-50.5-50.5-50.5-27.9 0-50.5 22.7-50.5 50.5s22.6 50.5 50.5 50.5zm0-74.1c13 0 23.5 10.6 23.5 23.5s-10.5 23.6-23.5 23.6-23.5-10.6-23.5-23.5 10.5-23.6 23.5-23.6z";

/// Stacked coins
#[component]
pub fn IconCurrencies(
    size: f64,
    #[props(extends = GlobalAttributes)]
    #[props(extends = svg)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        svg {
            view_box: "0 0 16 16",
            height: "{size}",
            width: "{size}",
            ..attributes,
            path { fill: "currentColor", d: CURRENCIES_PATH }
        }
    }
}

/// Padlock
#[component]
pub fn IconLock(
    size: f64,
    #[props(extends = GlobalAttributes)]
    #[props(extends = svg)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        svg {
            view_box: "0 0 482.8 482.8",
            height: "{size}",
            width: "{size}",
            ..attributes,
            path { fill: "currentColor", d: LOCK_SHACKLE_PATH }
            path { fill: "currentColor", d: LOCK_KEYHOLE_PATH }
        }
    }
}

/// Device outline
#[component]
pub fn IconDevices(
    size: f64,
    #[props(extends = GlobalAttributes)]
    #[props(extends = svg)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        svg {
            view_box: "0 0 16 16",
            height: "{size}",
            width: "{size}",
            ..attributes,
            rect {
                x: "4.5",
                y: "0.5",
                width: "7",
                height: "15",
                rx: "1.5",
                fill: "none",
                stroke: "currentColor",
            }
            rect { x: "7", y: "12", width: "2", height: "1", fill: "currentColor" }
        }
    }
}

/// Pulse line
#[component]
pub fn IconActivity(
    size: f64,
    #[props(extends = GlobalAttributes)]
    #[props(extends = svg)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            height: "{size}",
            width: "{size}",
            ..attributes,
            polyline {
                points: "22 12 18 12 15 21 9 3 6 12 2 12",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Downward chevron; drawn on an 8x7 grid, so `size` sets the width.
#[component]
pub fn IconAngleDown(
    size: f64,
    #[props(extends = GlobalAttributes)]
    #[props(extends = svg)]
    attributes: Vec<Attribute>,
) -> Element {
    let height = size * 7.0 / 8.0;
    rsx! {
        svg {
            view_box: "0 0 8 7",
            height: "{height}",
            width: "{size}",
            ..attributes,
            path {
                fill: "currentColor",
                d: "M4 5.17 7.15 1.9a.5.5 0 0 1 .72.7L4.36 6.24a.5.5 0 0 1-.72 0L.13 2.6a.5.5 0 1 1 .72-.7L4 5.17z",
            }
        }
    }
}
