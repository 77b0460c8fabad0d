//! Presentation state machine for the prediction results panel.
//!
//! `ResultsController` owns every piece of mutable state the panel has: the
//! selected province, the dropdown, the visible pane and the lazily loaded
//! table. It performs no I/O. Operations that need the network return a
//! ticket; the caller runs the fetch and passes the outcome back with
//! [`ResultsController::apply_results`] or [`ResultsController::apply_table`].
//!
//! Each results fetch gets a generation number. Outcomes whose generation is
//! not the latest one issued are dropped, so a slow response for an earlier
//! selection never overwrites a newer one.
//!
//! ```text
//! Idle --start--> Loading --Ok--> Rendered --select--> Loading ...
//!                    \--Err--> Error --select--> Loading ...
//! ```

use crate::error::FetchError;
use crate::fetcher::ResultsSource;
use crate::model::{CombinedPlotData, ResultsPayload, TablePayload};
use crate::province::{self, ALL_PROVINCES};
use log::{debug, info, warn};

/// One of the two mutually exclusive result views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    #[default]
    Plot,
    Table,
}

/// Selection bookkeeping shared by the filter and the table loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub current_province: String,
    pub table_loaded_for_current_selection: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            current_province: ALL_PROVINCES.to_string(),
            table_loaded_for_current_selection: false,
        }
    }
}

/// Province dropdown: option list, selected value, open/closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceSelector {
    options: Vec<String>,
    selected: String,
    open: bool,
}

impl Default for ProvinceSelector {
    fn default() -> Self {
        Self {
            options: vec![ALL_PROVINCES.to_string()],
            selected: ALL_PROVINCES.to_string(),
            open: false,
        }
    }
}

impl ProvinceSelector {
    /// Selector for a freshly rendered payload. Always starts closed.
    ///
    /// `chosen` is the value the user last picked from the dropdown, if any.
    pub fn from_payload(payload: &ResultsPayload, tracked: &str, chosen: Option<&str>) -> Self {
        let options = province::province_options(&payload.provinces);
        let selected = province::initial_selection(
            chosen,
            payload.selected_province.as_deref(),
            tracked,
            &options,
        );
        Self {
            options,
            selected,
            open: false,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn display_text(&self) -> &str {
        province::display_label(&self.selected)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Click on the selector button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn select(&mut self, value: &str) {
        self.selected = value.to_string();
        self.open = false;
    }
}

/// State of the lazily loaded table pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableLoader {
    #[default]
    NotRequested,
    Loading,
    Loaded(String),
    Failed(String),
}

/// Where the results panel is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPhase {
    /// Mounted, nothing requested yet.
    Idle,
    Loading,
    Rendered(Box<ResultsPayload>),
    /// Results fetch failed; holds the user-facing message.
    Error(String),
}

/// A results fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTicket {
    generation: u64,
    province: String,
}

impl ResultsTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn province(&self) -> &str {
        &self.province
    }
}

/// A table fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTicket {
    generation: u64,
    province: String,
}

impl TableTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn province(&self) -> &str {
        &self.province
    }
}

/// Whether an outcome changed the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// A newer results fetch was issued after this one; outcome dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsController {
    selection: SelectionState,
    selector: ProvinceSelector,
    phase: ResultsPhase,
    pane: Pane,
    table: TableLoader,
    /// Last value picked from the dropdown; outranks the payload's selection.
    chosen: Option<String>,
    generation: u64,
}

impl Default for ResultsController {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsController {
    /// Controller at mount time: province `"All"`, nothing loaded.
    pub fn new() -> Self {
        Self {
            selection: SelectionState::default(),
            selector: ProvinceSelector::default(),
            phase: ResultsPhase::Idle,
            pane: Pane::Plot,
            table: TableLoader::NotRequested,
            chosen: None,
            generation: 0,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn current_province(&self) -> &str {
        &self.selection.current_province
    }

    pub fn selector(&self) -> &ProvinceSelector {
        &self.selector
    }

    pub fn phase(&self) -> &ResultsPhase {
        &self.phase
    }

    /// The rendered payload, if the last results fetch succeeded.
    pub fn payload(&self) -> Option<&ResultsPayload> {
        match &self.phase {
            ResultsPhase::Rendered(payload) => Some(payload.as_ref()),
            _ => None,
        }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Interactive chart data, when the plot pane is showing one.
    pub fn visible_chart(&self) -> Option<&CombinedPlotData> {
        if self.pane != Pane::Plot {
            return None;
        }
        self.payload()?.combined_plot_data.as_ref()
    }

    pub fn table(&self) -> &TableLoader {
        &self.table
    }

    /// Generation of the most recently issued results fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter `Loading` for `province` and hand back the fetch to run.
    ///
    /// Any fetch still in flight becomes stale. Forgets any dropdown choice,
    /// so the payload decides the displayed selection.
    pub fn start(&mut self, province: impl Into<String>) -> ResultsTicket {
        self.chosen = None;
        self.begin(province.into())
    }

    /// Re-run the results fetch for the current province.
    pub fn reload(&mut self) -> ResultsTicket {
        let province = self.selection.current_province.clone();
        self.begin(province)
    }

    fn begin(&mut self, province: String) -> ResultsTicket {
        self.generation += 1;
        self.selection.current_province = province;
        self.selection.table_loaded_for_current_selection = false;
        self.phase = ResultsPhase::Loading;
        self.table = TableLoader::NotRequested;

        info!(
            "Loading results for province {:?} (generation {})",
            self.selection.current_province, self.generation
        );
        ResultsTicket {
            generation: self.generation,
            province: self.selection.current_province.clone(),
        }
    }

    /// Apply the outcome of a results fetch.
    pub fn apply_results(
        &mut self,
        ticket: &ResultsTicket,
        outcome: Result<ResultsPayload, FetchError>,
    ) -> Applied {
        if ticket.generation != self.generation {
            debug!(
                "Dropping stale results for {:?} (generation {}, latest {})",
                ticket.province, ticket.generation, self.generation
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(payload) => {
                self.selector = ProvinceSelector::from_payload(
                    &payload,
                    &self.selection.current_province,
                    self.chosen.as_deref(),
                );
                self.selection.table_loaded_for_current_selection = false;
                self.table = TableLoader::NotRequested;
                self.pane = Pane::Plot;
                self.phase = ResultsPhase::Rendered(Box::new(payload));
            }
            Err(e) => {
                warn!("Results for {:?} failed: {}", ticket.province, e);
                self.selector.close();
                self.phase = ResultsPhase::Error(e.user_message());
            }
        }
        Applied::Applied
    }

    /// Click on the selector button.
    pub fn toggle_selector(&mut self) {
        self.selector.toggle();
    }

    /// A click landed somewhere on the page.
    ///
    /// Closes the dropdown when it is open and the click was outside it.
    /// Returns whether the dropdown closed.
    pub fn outside_click(&mut self, inside_selector: bool) -> bool {
        if inside_selector || !self.selector.is_open() {
            return false;
        }
        self.selector.close();
        true
    }

    /// Pick a province from the dropdown and reload results for it.
    pub fn select_option(&mut self, value: &str) -> ResultsTicket {
        self.selector.select(value);
        self.chosen = Some(value.to_string());
        self.begin(value.to_string())
    }

    /// Show `pane`. The first activation of the table pane after a results
    /// render returns the table fetch to run; later activations only switch.
    pub fn activate(&mut self, pane: Pane) -> Option<TableTicket> {
        if self.payload().is_none() {
            return None;
        }
        self.pane = pane;

        if pane != Pane::Table || self.selection.table_loaded_for_current_selection {
            return None;
        }

        // Set before the fetch completes so a second click does not refetch.
        self.selection.table_loaded_for_current_selection = true;
        self.table = TableLoader::Loading;
        info!(
            "Loading forecast table for province {:?}",
            self.selection.current_province
        );
        Some(TableTicket {
            generation: self.generation,
            province: self.selection.current_province.clone(),
        })
    }

    /// Apply the outcome of a table fetch. Only the table pane changes.
    pub fn apply_table(
        &mut self,
        ticket: &TableTicket,
        outcome: Result<TablePayload, FetchError>,
    ) -> Applied {
        if ticket.generation != self.generation || self.table != TableLoader::Loading {
            debug!(
                "Dropping stale table for {:?} (generation {}, latest {})",
                ticket.province, ticket.generation, self.generation
            );
            return Applied::Stale;
        }

        self.table = match outcome {
            Ok(table) => TableLoader::Loaded(table.forecast_table),
            Err(e) => {
                warn!("Table for {:?} failed: {}", ticket.province, e);
                TableLoader::Failed(e.user_message())
            }
        };
        Applied::Applied
    }

    /// Start, fetch and apply results for the current province.
    pub async fn load<S: ResultsSource>(&mut self, source: &S) -> Applied {
        let ticket = self.reload();
        let outcome = source.fetch_results(ticket.province()).await;
        self.apply_results(&ticket, outcome)
    }

    /// Select `value`, then fetch and apply its results.
    pub async fn select_and_load<S: ResultsSource>(&mut self, value: &str, source: &S) -> Applied {
        let ticket = self.select_option(value);
        let outcome = source.fetch_results(ticket.province()).await;
        self.apply_results(&ticket, outcome)
    }

    /// Activate the table pane and, if it has not been requested for the
    /// current results, fetch and apply it.
    pub async fn load_table<S: ResultsSource>(&mut self, source: &S) -> Option<Applied> {
        let ticket = self.activate(Pane::Table)?;
        let outcome = source.fetch_table(ticket.province()).await;
        Some(self.apply_table(&ticket, outcome))
    }
}
