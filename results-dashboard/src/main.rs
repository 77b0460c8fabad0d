//! Sugar Price Forecast Results
//!
//! Shows the output of the trained price model: a province filter, RMSE and
//! MAPE, the actual-vs-predicted image, and a chart/table toggle for the
//! historical + forecast series. The table is only requested the first time
//! the table pane is opened for a given set of results.
//!
//! Data flow:
//! 1. On mount, results for `"All"` are requested from `/results/` on the
//!    page's own origin.
//! 2. Picking a province requests results again for that province; only the
//!    response for the latest request is applied.
//! 3. Opening the table pane requests `/results/table/` once per results.
//! 4. Whenever the visible chart changes, its data is handed to Plotly.

use dioxus::prelude::*;
use sfr_results_ui::components::{ChartHeader, ResultsPanel, PLOT_CONTAINER_ID};
use sfr_results_ui::js_bridge;
use sfr_results_ui::state::AppState;

/// Mount point; everything below it is owned by the app.
const ROOT_ID: &str = "results-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::from_window);

    // Initial load on mount
    use_effect(move || {
        js_bridge::init_plotting();
        state.load();
    });

    // Re-render chart whenever the visible chart data changes
    let chart = use_memo(move || state.visible_chart());
    use_effect(move || match chart() {
        Some(chart) => {
            log::info!("Rendering forecast chart with {} series", chart.data.len());
            js_bridge::render_plot(PLOT_CONTAINER_ID, &chart);
        }
        None => {
            log::info!("No interactive chart visible, clearing plot container");
            js_bridge::destroy_chart(PLOT_CONTAINER_ID);
        }
    });

    // Registered once; clicks inside the selector stop propagating before they get here.
    let on_page_click = move |_| state.dismiss_selector();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            onclick: on_page_click,

            ChartHeader {
                title: "Sugar Price Forecast Results".to_string(),
                subtitle: "Random forest forecast of sugar prices by province".to_string(),
            }

            ResultsPanel {}
        }
    }
}
