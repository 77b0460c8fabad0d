//! Application state managed via Dioxus context.
//!
//! `AppState` holds the results controller in a signal and exposes the user
//! actions as methods. Each action mutates the controller synchronously and,
//! when the controller hands back a ticket, spawns the matching fetch. The
//! outcome is applied through the controller, which drops stale generations.
//! Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sfr_results::{
    render, CombinedPlotData, ConfigError, EndpointConfig, FetchError, FetchTarget,
    HttpResultsFetcher, Pane, PanelView, ResultsController, ResultsSource, ResultsTicket,
    TableTicket,
};

/// Shared state for the results dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Presentation state machine
    pub controller: Signal<ResultsController>,
    /// HTTP client for the results service
    pub fetcher: Signal<Option<HttpResultsFetcher>>,
    /// Why the fetcher could not be built, if it could not
    pub config_error: Signal<Option<String>>,
}

impl AppState {
    pub fn new(config: Result<EndpointConfig, ConfigError>) -> Self {
        let (fetcher, config_error) = match config {
            Ok(config) => (Some(HttpResultsFetcher::new(config)), None),
            Err(e) => {
                log::error!("Invalid endpoint configuration: {}", e);
                (None, Some(e.to_string()))
            }
        };
        Self {
            controller: Signal::new(ResultsController::new()),
            fetcher: Signal::new(fetcher),
            config_error: Signal::new(config_error),
        }
    }

    /// State for endpoints served from the page's own origin.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(EndpointConfig::new(&origin))
    }

    /// Pure description of what the panel shows right now.
    pub fn view(&self) -> PanelView {
        render(&self.controller.read())
    }

    /// Chart data to hand to Plotly, when the plot pane shows an interactive chart.
    pub fn visible_chart(&self) -> Option<CombinedPlotData> {
        self.controller.read().visible_chart().cloned()
    }

    /// Load results for the currently tracked province.
    pub fn load(mut self) {
        let ticket = self.controller.write().reload();
        self.run_results(ticket);
    }

    pub fn select_province(mut self, value: String) {
        let ticket = self.controller.write().select_option(&value);
        self.run_results(ticket);
    }

    pub fn activate_pane(mut self, pane: Pane) {
        let ticket = self.controller.write().activate(pane);
        if let Some(ticket) = ticket {
            self.run_table(ticket);
        }
    }

    pub fn toggle_selector(mut self) {
        self.controller.write().toggle_selector();
    }

    /// Page-level click that did not land inside the selector.
    pub fn dismiss_selector(mut self) {
        // Writing marks subscribers dirty even when nothing changes.
        if self.controller.peek().selector().is_open() {
            self.controller.write().outside_click(false);
        }
    }

    fn run_results(self, ticket: ResultsTicket) {
        let mut controller = self.controller;
        let fetcher = (*self.fetcher.peek()).clone();
        let config_error = (*self.config_error.peek()).clone();

        spawn(async move {
            let outcome = match &fetcher {
                Some(fetcher) => fetcher.fetch_results(ticket.province()).await,
                None => Err(FetchError::Transport {
                    target: FetchTarget::Results,
                    detail: config_error.unwrap_or_default(),
                }),
            };
            controller.write().apply_results(&ticket, outcome);
        });
    }

    fn run_table(self, ticket: TableTicket) {
        let mut controller = self.controller;
        let fetcher = (*self.fetcher.peek()).clone();

        spawn(async move {
            let outcome = match &fetcher {
                Some(fetcher) => fetcher.fetch_table(ticket.province()).await,
                None => Err(FetchError::Transport {
                    target: FetchTarget::Table,
                    detail: "no fetcher configured".to_string(),
                }),
            };
            controller.write().apply_table(&ticket, outcome);
        });
    }
}
