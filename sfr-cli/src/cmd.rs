//! Command implementations for the SFR CLI.
//!
//! Each command drives a `ResultsController` against the HTTP fetcher and
//! prints the text rendering of the resulting view.

use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use log::info;
use sfr_results::config::{DEFAULT_RESULTS_PATH, DEFAULT_TABLE_PATH};
use sfr_results::province::ALL_PROVINCES;
use sfr_results::{render, EndpointConfig, HttpResultsFetcher, ResultsController, ResultsPhase};
use std::time::Duration;

/// Where the results service lives.
#[derive(Args, Debug)]
pub struct EndpointArgs {
    /// Base URL of the results service
    #[arg(short = 'b', long, default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Path of the results endpoint
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    pub results_path: String,

    /// Path of the forecast table endpoint
    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    pub table_path: String,

    /// Forecast horizon in days (1-180); server default when omitted
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

impl EndpointArgs {
    pub fn config(&self) -> anyhow::Result<EndpointConfig> {
        let config =
            EndpointConfig::with_paths(&self.base_url, &self.results_path, &self.table_path)?
                .with_horizon(self.horizon)?;
        Ok(config)
    }

    fn fetcher(&self) -> anyhow::Result<HttpResultsFetcher> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(HttpResultsFetcher::with_client(client, self.config()?))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print metrics and chart summary for a province
    Results {
        /// Province to filter by ("All" for every province)
        #[arg(short = 'p', long, default_value = ALL_PROVINCES)]
        province: String,
    },

    /// Print the forecast table for a province
    Table {
        /// Province to filter by ("All" for every province)
        #[arg(short = 'p', long, default_value = ALL_PROVINCES)]
        province: String,
    },
}

pub async fn run(endpoint: EndpointArgs, command: Command) -> anyhow::Result<()> {
    let fetcher = endpoint.fetcher()?;
    let mut controller = ResultsController::new();

    match command {
        Command::Results { province } => {
            info!("Requesting results for {}", province);
            controller.select_and_load(&province, &fetcher).await;
        }
        Command::Table { province } => {
            info!("Requesting results and table for {}", province);
            controller.select_and_load(&province, &fetcher).await;
            controller.load_table(&fetcher).await;
        }
    }

    print!("{}", render(&controller));

    if let ResultsPhase::Error(message) = controller.phase() {
        bail!("could not load results: {}", message);
    }
    Ok(())
}
