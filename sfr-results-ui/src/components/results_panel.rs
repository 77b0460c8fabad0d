//! Top-level results panel: the single place a `PanelView` is drawn.

use crate::components::{
    EmptyState, ForecastTable, LoadingSpinner, MetricsPanel, PaneTabs, PlotPane, ProvinceSelector,
};
use crate::state::AppState;
use dioxus::prelude::*;
use sfr_results::view::LOADING_MESSAGE;
use sfr_results::{Pane, PanelView};

/// Draws the current view of the results controller.
#[component]
pub fn ResultsPanel() -> Element {
    let state = use_context::<AppState>();

    match state.view() {
        PanelView::Loading => rsx! {
            LoadingSpinner { message: LOADING_MESSAGE.to_string() }
        },
        PanelView::Empty(view) => rsx! {
            EmptyState { view: view }
        },
        PanelView::Results(results) => {
            let results = *results;
            rsx! {
                ProvinceSelector { filter: results.filter }
                MetricsPanel {
                    metrics: results.metrics,
                    evaluation_image: results.evaluation_image,
                }
                PaneTabs { active: results.active_pane }
                PlotPane {
                    plot: results.plot,
                    visible: results.active_pane == Pane::Plot,
                }
                ForecastTable {
                    table: results.table,
                    visible: results.active_pane == Pane::Table,
                }
            }
        }
    }
}
