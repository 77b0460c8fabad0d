//! Client side of the sugar price forecast results page.
//!
//! This crate holds everything about the results panel that does not need a
//! browser, so it can be shared by the Dioxus dashboard and the native CLI:
//!
//! - [`model`]: JSON payloads returned by the results service
//! - [`province`]: the province filter rules (`"All"` sentinel, option list)
//! - [`config`]: endpoint URLs and the optional forecast horizon
//! - [`fetcher`]: the [`ResultsSource`] seam and its `reqwest` implementation
//! - [`controller`]: the presentation state machine
//! - [`view`]: pure rendering of controller state into a [`PanelView`]
//!
//! # Usage
//!
//! ```rust,no_run
//! use sfr_results::{render, EndpointConfig, HttpResultsFetcher, ResultsController};
//!
//! # async fn run() -> Result<(), sfr_results::ConfigError> {
//! let config = EndpointConfig::new("http://localhost:8000")?;
//! let fetcher = HttpResultsFetcher::new(config);
//!
//! let mut controller = ResultsController::new();
//! controller.load(&fetcher).await;
//! controller.load_table(&fetcher).await;
//! println!("{}", render(&controller));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod province;
pub mod view;

pub use config::EndpointConfig;
pub use controller::{
    Applied, Pane, ProvinceSelector, ResultsController, ResultsPhase, ResultsTicket,
    SelectionState, TableLoader, TableTicket,
};
pub use error::{ConfigError, FetchError, FetchTarget};
pub use fetcher::{HttpResultsFetcher, ResultsSource};
pub use model::{CombinedPlotData, ResultsPayload, TablePayload};
pub use view::{render, PanelView};
