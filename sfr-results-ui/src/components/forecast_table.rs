//! Table pane body.

use crate::components::{ErrorDisplay, LoadingSpinner};
use dioxus::prelude::*;
use sfr_results::view::{TableView, TABLE_LOADING_MESSAGE};

#[derive(Props, Clone, PartialEq)]
pub struct ForecastTableProps {
    pub table: TableView,
    #[props(default = true)]
    pub visible: bool,
}

/// Forecast table; server markup is inserted as-is.
#[component]
pub fn ForecastTable(props: ForecastTableProps) -> Element {
    let display = if props.visible { "block" } else { "none" };

    rsx! {
        div {
            role: "tabpanel",
            style: "display: {display}; width: 100%; overflow-x: auto;",
            {match props.table {
                TableView::NotLoaded => rsx! {},
                TableView::Loading => rsx! {
                    LoadingSpinner { message: TABLE_LOADING_MESSAGE.to_string() }
                },
                TableView::Markup(markup) => rsx! {
                    div {
                        id: "forecast-table",
                        dangerous_inner_html: "{markup}",
                    }
                },
                TableView::Error(message) => rsx! {
                    ErrorDisplay { prefix: "Error loading table: ".to_string(), message: message }
                },
            }}
        }
    }
}
