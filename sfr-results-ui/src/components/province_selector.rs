//! Dropdown selector for choosing a province.

use crate::state::AppState;
use dioxus::prelude::*;
use sfr_results::view::FilterView;

#[derive(Props, Clone, PartialEq)]
pub struct ProvinceSelectorProps {
    pub filter: FilterView,
}

/// Province dropdown.
/// Clicks inside the selector stop propagating, so the page-level listener
/// only sees clicks outside it.
#[component]
pub fn ProvinceSelector(props: ProvinceSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let filter = props.filter;

    let on_region_click = move |evt: MouseEvent| {
        evt.stop_propagation();
    };

    let on_toggle = move |_| {
        state.toggle_selector();
    };

    rsx! {
        div {
            style: "position: relative; display: inline-block; margin: 8px 0;",
            onclick: on_region_click,
            span {
                style: "font-weight: bold; margin-right: 8px;",
                "Province: "
            }
            button {
                id: "province-select",
                r#type: "button",
                style: "min-width: 180px; padding: 6px 10px; text-align: left; border: 1px solid #BDBDBD; border-radius: 4px; background: #FFF; cursor: pointer;",
                onclick: on_toggle,
                "{filter.display_text}"
                span { style: "float: right;", if filter.open { "▲" } else { "▼" } }
            }
            if filter.open {
                ul {
                    role: "listbox",
                    style: "position: absolute; z-index: 10; left: 0; right: 0; margin: 2px 0 0 0; padding: 4px 0; list-style: none; background: #FFF; border: 1px solid #BDBDBD; border-radius: 4px; box-shadow: 0 2px 6px rgba(0,0,0,0.15); max-height: 280px; overflow-y: auto;",
                    for option in filter.options.iter() {
                        li {
                            key: "{option.value}",
                            role: "option",
                            "aria-selected": "{option.selected}",
                            style: option_style(option.selected),
                            onclick: {
                                let value = option.value.clone();
                                move |_| state.select_province(value.clone())
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

fn option_style(selected: bool) -> &'static str {
    if selected {
        "padding: 6px 12px; cursor: pointer; background: #E3F2FD; font-weight: bold;"
    } else {
        "padding: 6px 12px; cursor: pointer;"
    }
}
