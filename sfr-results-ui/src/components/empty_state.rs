//! Full-panel empty state shown when results could not be loaded.

use dioxus::prelude::*;
use sfr_results::view::EmptyStateView;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub view: EmptyStateView,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "padding: 40px 16px; text-align: center; color: #555; border: 1px dashed #BDBDBD; border-radius: 8px;",
            p {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "{props.view.headline}"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #C62828;",
                "{props.view.detail}"
            }
        }
    }
}
