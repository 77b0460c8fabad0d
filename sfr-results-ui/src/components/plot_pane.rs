//! Plot pane: Plotly container or static image.

use dioxus::prelude::*;
use sfr_results::view::PlotView;

/// DOM id Plotly renders the combined chart into.
pub const PLOT_CONTAINER_ID: &str = "combined-plot";

#[derive(Props, Clone, PartialEq)]
pub struct PlotPaneProps {
    pub plot: PlotView,
    /// Hidden panes stay mounted so Plotly keeps its container
    #[props(default = true)]
    pub visible: bool,
    #[props(default = 450)]
    pub min_height: u32,
}

/// A container div for the combined forecast chart.
#[component]
pub fn PlotPane(props: PlotPaneProps) -> Element {
    let display = if props.visible { "block" } else { "none" };
    let style = format!(
        "display: {}; min-height: {}px; position: relative; width: 100%;",
        display, props.min_height
    );

    rsx! {
        div {
            role: "tabpanel",
            style: "{style}",
            {match props.plot {
                PlotView::Interactive(_) => rsx! {
                    div {
                        id: PLOT_CONTAINER_ID,
                        style: "width: 100%; min-height: {props.min_height}px;",
                    }
                },
                PlotView::Image(src) => rsx! {
                    img {
                        src: "{src}",
                        alt: "Historical and forecasted prices",
                        style: "width: 100%;",
                    }
                },
                PlotView::None => rsx! {
                    div {
                        style: "padding: 40px; text-align: center; color: #666;",
                        "No forecast chart available for this selection."
                    }
                },
            }}
        }
    }
}
