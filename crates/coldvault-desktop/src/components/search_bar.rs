//! Global search field in the top bar

use dioxus::prelude::*;

use crate::state::AppState;

/// Search input bound to the shared query
#[component]
pub fn GlobalSearch() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "top-bar-search",
            style: "display: flex; align-items: center; flex-grow: 1;",

            input {
                r#type: "text",
                placeholder: "Search accounts...",
                value: "{state.search_query}",
                oninput: move |evt| {
                    state.search_query.set(evt.value());
                },
                style: "
                    width: 100%;
                    padding: 8px 0;
                    border: none;
                    font-size: 13px;
                    background: transparent;
                    color: {colors.dark};
                ",
            }
        }
    }
}
