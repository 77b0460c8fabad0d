//! Payloads returned by the prediction results service.
//!
//! Both structs derive `Deserialize` for the fetcher and `Serialize` so chart
//! data can be handed to the JS charting layer as JSON unchanged.

use serde::{Deserialize, Serialize};

/// Interactive chart description (Plotly `data` + `layout`).
///
/// The client never inspects the series; it only forwards them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedPlotData {
    /// One entry per trace.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    /// Axis titles, legend placement and so on.
    #[serde(default)]
    pub layout: serde_json::Value,
}

/// Evaluation metrics, chart data and valid filter values for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    /// Root mean squared error of the trained model.
    pub rmse: f64,
    /// Mean absolute percentage error, already expressed in percent.
    pub mape: f64,
    /// Evaluation (actual vs. predicted) image, usually a `data:` URL.
    #[serde(default)]
    pub plot: String,
    /// Interactive historical + forecast chart.
    #[serde(default)]
    pub combined_plot_data: Option<CombinedPlotData>,
    /// Static rendering of the historical + forecast chart.
    #[serde(default)]
    pub combined_plot: Option<String>,
    /// Provinces the model knows about, without the `"All"` sentinel.
    #[serde(default)]
    pub provinces: Vec<String>,
    /// Province the server computed the results for.
    #[serde(default)]
    pub selected_province: Option<String>,
    /// Forecast horizon in days the server used.
    #[serde(default)]
    pub selected_horizon: Option<u32>,
}

/// Pre-rendered forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    /// HTML markup inserted verbatim into the table pane.
    pub forecast_table: String,
}
