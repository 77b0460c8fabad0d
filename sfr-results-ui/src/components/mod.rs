//! Reusable Dioxus RSX components for the results dashboard.

mod chart_header;
mod empty_state;
mod error_display;
mod forecast_table;
mod loading_spinner;
mod metrics_panel;
mod pane_tabs;
mod plot_pane;
mod province_selector;
mod results_panel;

pub use chart_header::ChartHeader;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use forecast_table::ForecastTable;
pub use loading_spinner::LoadingSpinner;
pub use metrics_panel::MetricsPanel;
pub use pane_tabs::PaneTabs;
pub use plot_pane::{PlotPane, PLOT_CONTAINER_ID};
pub use province_selector::ProvinceSelector;
pub use results_panel::ResultsPanel;
