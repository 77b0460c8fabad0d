//! Plot / table toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use sfr_results::Pane;

const ACTIVE_TAB_STYLE: &str =
    "padding: 8px 16px; border: none; border-bottom: 3px solid #1976D2; background: none; color: #1976D2; font-weight: bold; cursor: pointer;";
const INACTIVE_TAB_STYLE: &str =
    "padding: 8px 16px; border: none; border-bottom: 3px solid transparent; background: none; color: #666; cursor: pointer;";

#[derive(Props, Clone, PartialEq)]
pub struct PaneTabsProps {
    pub active: Pane,
}

/// Tab bar switching between the plot and table panes.
#[component]
pub fn PaneTabs(props: PaneTabsProps) -> Element {
    let state = use_context::<AppState>();
    let plot_selected = props.active == Pane::Plot;
    let table_selected = props.active == Pane::Table;
    let style_for = |pane: Pane| {
        if props.active == pane {
            ACTIVE_TAB_STYLE
        } else {
            INACTIVE_TAB_STYLE
        }
    };

    rsx! {
        div {
            role: "tablist",
            style: "display: flex; gap: 4px; border-bottom: 1px solid #E0E0E0; margin: 12px 0 8px 0;",
            button {
                role: "tab",
                "aria-selected": "{plot_selected}",
                style: style_for(Pane::Plot),
                onclick: move |_| state.activate_pane(Pane::Plot),
                "Chart"
            }
            button {
                role: "tab",
                "aria-selected": "{table_selected}",
                style: style_for(Pane::Table),
                onclick: move |_| state.activate_pane(Pane::Table),
                "Table"
            }
        }
    }
}
