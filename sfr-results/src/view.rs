//! Pure rendering of controller state.
//!
//! [`render`] turns a [`ResultsController`] into a [`PanelView`], a plain
//! description of what the panel shows. The Dioxus components draw a
//! `PanelView` and nothing else; the CLI prints its `Display` form.

use crate::controller::{Pane, ResultsController, ResultsPhase, TableLoader};
use crate::model::CombinedPlotData;
use crate::province::display_label;
use std::fmt;

/// Placeholder shown while results are loading.
pub const LOADING_MESSAGE: &str = "Loading prediction results...";
/// Placeholder shown in the table pane while the table loads.
pub const TABLE_LOADING_MESSAGE: &str = "Loading forecast table...";
/// Headline of the empty state shown when results cannot be loaded.
pub const EMPTY_STATE_MESSAGE: &str =
    "No prediction results available yet. Upload a dataset and train the model to see results here.";

pub fn format_rmse(rmse: f64) -> String {
    format!("{:.2}", rmse)
}

pub fn format_mape(mape: f64) -> String {
    format!("{:.2}%", mape)
}

/// Everything below the mount point.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Loading,
    Empty(EmptyStateView),
    Results(Box<ResultsView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateView {
    pub headline: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub filter: FilterView,
    pub metrics: MetricsView,
    pub plot: PlotView,
    /// Actual vs. predicted image.
    pub evaluation_image: String,
    pub active_pane: Pane,
    pub table: TableView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub display_text: String,
    pub options: Vec<OptionView>,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsView {
    pub rmse: String,
    pub mape: String,
    pub horizon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotView {
    /// Handed to the charting layer.
    Interactive(CombinedPlotData),
    /// Static image fallback.
    Image(String),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    NotLoaded,
    Loading,
    /// Markup inserted verbatim.
    Markup(String),
    Error(String),
}

/// Describe the panel for the controller's current state.
pub fn render(controller: &ResultsController) -> PanelView {
    let payload = match controller.phase() {
        ResultsPhase::Idle | ResultsPhase::Loading => return PanelView::Loading,
        ResultsPhase::Error(message) => {
            return PanelView::Empty(EmptyStateView {
                headline: EMPTY_STATE_MESSAGE.to_string(),
                detail: message.clone(),
            })
        }
        ResultsPhase::Rendered(payload) => payload,
    };

    let selector = controller.selector();
    let filter = FilterView {
        display_text: selector.display_text().to_string(),
        options: selector
            .options()
            .iter()
            .map(|value| OptionView {
                value: value.clone(),
                label: display_label(value).to_string(),
                selected: value == selector.selected(),
            })
            .collect(),
        open: selector.is_open(),
    };

    let metrics = MetricsView {
        rmse: format_rmse(payload.rmse),
        mape: format_mape(payload.mape),
        horizon: payload.selected_horizon.map(|days| format!("{} days", days)),
    };

    let plot = match (&payload.combined_plot_data, &payload.combined_plot) {
        (Some(data), _) => PlotView::Interactive(data.clone()),
        (None, Some(image)) if !image.is_empty() => PlotView::Image(image.clone()),
        _ => PlotView::None,
    };

    let table = match controller.table() {
        TableLoader::NotRequested => TableView::NotLoaded,
        TableLoader::Loading => TableView::Loading,
        TableLoader::Loaded(markup) => TableView::Markup(markup.clone()),
        TableLoader::Failed(message) => TableView::Error(message.clone()),
    };

    PanelView::Results(Box::new(ResultsView {
        filter,
        metrics,
        plot,
        evaluation_image: payload.plot.clone(),
        active_pane: controller.pane(),
        table,
    }))
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelView::Loading => writeln!(f, "{}", LOADING_MESSAGE),
            PanelView::Empty(empty) => {
                writeln!(f, "{}", empty.headline)?;
                writeln!(f, "Error: {}", empty.detail)
            }
            PanelView::Results(results) => write!(f, "{}", results),
        }
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options: Vec<&str> = self.filter.options.iter().map(|o| o.label.as_str()).collect();
        writeln!(f, "Province: {} [{}]", self.filter.display_text, options.join(", "))?;
        writeln!(f, "RMSE: {}", self.metrics.rmse)?;
        writeln!(f, "MAPE: {}", self.metrics.mape)?;
        if let Some(horizon) = &self.metrics.horizon {
            writeln!(f, "Horizon: {}", horizon)?;
        }

        match self.active_pane {
            Pane::Plot => {
                let plot = match &self.plot {
                    PlotView::Interactive(data) => {
                        format!("interactive chart, {} series", data.data.len())
                    }
                    PlotView::Image(_) => "static image".to_string(),
                    PlotView::None => "none".to_string(),
                };
                writeln!(f, "Plot: {}", plot)
            }
            Pane::Table => match &self.table {
                TableView::NotLoaded => writeln!(f, "Table: not loaded"),
                TableView::Loading => writeln!(f, "{}", TABLE_LOADING_MESSAGE),
                TableView::Markup(markup) => writeln!(f, "{}", markup),
                TableView::Error(message) => writeln!(f, "Error loading table: {}", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, FetchTarget};
    use crate::model::{ResultsPayload, TablePayload};

    fn payload() -> ResultsPayload {
        ResultsPayload {
            rmse: 1.0,
            mape: 2.0,
            plot: "data:image/png;base64,EVAL".to_string(),
            combined_plot_data: None,
            combined_plot: None,
            provinces: vec!["ON".to_string(), "QC".to_string()],
            selected_province: Some("All".to_string()),
            selected_horizon: None,
        }
    }

    fn results(view: PanelView) -> ResultsView {
        match view {
            PanelView::Results(results) => *results,
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn test_metric_formatting() {
        assert_eq!(format_rmse(12.345), "12.35");
        assert_eq!(format_mape(3.4), "3.40%");
        assert_eq!(format_rmse(0.0), "0.00");
    }

    #[test]
    fn test_loading_view() {
        let mut controller = ResultsController::new();
        assert_eq!(render(&controller), PanelView::Loading);
        controller.start("All");
        assert_eq!(render(&controller), PanelView::Loading);
    }

    #[test]
    fn test_initial_load_end_to_end() {
        let mut controller = ResultsController::new();
        let ticket = controller.start("All");
        controller.apply_results(&ticket, Ok(payload()));

        let view = results(render(&controller));
        assert_eq!(view.filter.display_text, "All Provinces");
        let labels: Vec<&str> = view.filter.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Provinces", "ON", "QC"]);
        assert!(view.filter.options[0].selected);
        assert!(!view.filter.open);
        assert_eq!(view.active_pane, Pane::Plot);
        assert_eq!(view.metrics.rmse, "1.00");
        assert_eq!(view.metrics.mape, "2.00%");
        assert_eq!(view.evaluation_image, "data:image/png;base64,EVAL");
        assert_eq!(view.plot, PlotView::None);
        assert_eq!(view.table, TableView::NotLoaded);
    }

    #[test]
    fn test_error_view_contains_server_message() {
        let mut controller = ResultsController::new();
        let ticket = controller.start("All");
        controller.apply_results(
            &ticket,
            Err(FetchError::Status {
                target: FetchTarget::Results,
                status: 404,
                message: Some("no model".to_string()),
            }),
        );

        match render(&controller) {
            PanelView::Empty(empty) => {
                assert_eq!(empty.headline, EMPTY_STATE_MESSAGE);
                assert!(empty.detail.contains("no model"));
            }
            other => panic!("expected empty state, got {:?}", other),
        }
        assert!(render(&controller).to_string().contains("no model"));
    }

    #[test]
    fn test_plot_selection() {
        let mut with_chart = payload();
        with_chart.combined_plot = Some("data:image/png;base64,COMBINED".to_string());
        with_chart.combined_plot_data = Some(CombinedPlotData {
            data: vec![serde_json::json!({"y": [1.0, 2.0]})],
            layout: serde_json::json!({}),
        });

        let mut controller = ResultsController::new();
        let ticket = controller.start("All");
        controller.apply_results(&ticket, Ok(with_chart.clone()));
        assert!(matches!(results(render(&controller)).plot, PlotView::Interactive(_)));

        with_chart.combined_plot_data = None;
        let ticket = controller.start("All");
        controller.apply_results(&ticket, Ok(with_chart));
        assert_eq!(
            results(render(&controller)).plot,
            PlotView::Image("data:image/png;base64,COMBINED".to_string())
        );
    }

    #[test]
    fn test_table_pane_views() {
        let mut controller = ResultsController::new();
        let ticket = controller.start("All");
        controller.apply_results(&ticket, Ok(payload()));

        let table_ticket = controller.activate(Pane::Table).unwrap();
        let view = results(render(&controller));
        assert_eq!(view.active_pane, Pane::Table);
        assert_eq!(view.table, TableView::Loading);

        controller.apply_table(
            &table_ticket,
            Ok(TablePayload {
                forecast_table: "<table id=\"forecast\"></table>".to_string(),
            }),
        );
        let view = results(render(&controller));
        assert_eq!(
            view.table,
            TableView::Markup("<table id=\"forecast\"></table>".to_string())
        );
        // Metrics are untouched by the table pane.
        assert_eq!(view.metrics.rmse, "1.00");
    }

    #[test]
    fn test_horizon_metric() {
        let mut with_horizon = payload();
        with_horizon.selected_horizon = Some(90);

        let mut controller = ResultsController::new();
        let ticket = controller.start("All");
        controller.apply_results(&ticket, Ok(with_horizon));

        let view = results(render(&controller));
        assert_eq!(view.metrics.horizon.as_deref(), Some("90 days"));
        assert!(view.to_string().contains("Horizon: 90 days"));
    }

    #[test]
    fn test_text_rendering() {
        let mut controller = ResultsController::new();
        let ticket = controller.start("All");
        controller.apply_results(&ticket, Ok(payload()));

        let text = render(&controller).to_string();
        assert!(text.contains("Province: All Provinces [All Provinces, ON, QC]"));
        assert!(text.contains("RMSE: 1.00"));
        assert!(text.contains("MAPE: 2.00%"));
        assert!(text.contains("Plot: none"));
    }
}
