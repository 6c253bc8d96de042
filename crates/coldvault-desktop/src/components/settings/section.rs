use dioxus::prelude::*;

use coldvault_core::color::rgba;
use coldvault_core::layout::{Align, BoxStyle, Justify};

use crate::components::layout::{Card, Flex};
use crate::state::AppState;

/// Card holding one settings section
#[component]
pub fn SettingsSection(children: Element) -> Element {
    rsx! {
        Card {
            p: 0,
            class: "settings-section",
            {children}
        }
    }
}

/// Section header: round tinted icon, title and description
#[component]
pub fn SettingsSectionHeader(
    #[props(into)] title: String,
    #[props(into)] desc: String,
    icon: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let icon_bg = rgba(colors.wallet, 0.2).unwrap_or_else(|_| colors.light_fog.to_string());

    rsx! {
        Flex {
            p: 4,
            horizontal: true,
            align: Align::Center,
            style: format!("border-bottom: 1px solid {}; line-height: normal;", colors.light_fog),

            Flex {
                align: Align::Center,
                justify: Justify::Center,
                mr: 3,
                color: "wallet",
                style: format!("height: 30px; width: 30px; border-radius: 50%; background: {icon_bg};"),
                {icon}
            }
            Flex {
                div {
                    style: "font-family: 'Museo Sans', sans-serif; color: {colors.dark};",
                    "{title}"
                }
                div {
                    style: "font-size: 12px;",
                    "{desc}"
                }
            }
        }
    }
}

/// Body of a section; consecutive rows are separated by a divider
#[component]
pub fn SettingsSectionBody(children: Element) -> Element {
    rsx! {
        Flex {
            class: "settings-section-body",
            {children}
        }
    }
}

/// One settings row. Without `onclick` the row is inert.
#[component]
pub fn SettingsSectionRow(
    #[props(into)] title: String,
    #[props(into)] desc: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let row_css = BoxStyle::horizontal().p(4).align(Align::Center).to_css();
    let cursor = row_cursor(onclick.is_some());

    rsx! {
        div {
            class: "settings-section-row",
            style: "{row_css} cursor: {cursor};",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },

            Flex {
                grow: true,
                div {
                    style: "font-weight: 600; font-size: 13px; color: {colors.dark};",
                    "{title}"
                }
                div {
                    style: "font-size: 12px; color: {colors.grey};",
                    "{desc}"
                }
            }
            Flex {
                {children}
            }
        }
    }
}

const fn row_cursor(clickable: bool) -> &'static str {
    if clickable {
        "pointer"
    } else {
        "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_clickable_rows_show_pointer() {
        assert_eq!(row_cursor(true), "pointer");
        assert_eq!(row_cursor(false), "default");
    }
}
