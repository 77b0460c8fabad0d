//! Endpoint configuration for the results service.

use crate::error::{ConfigError, FetchTarget};
use reqwest::Url;

/// Path of the results endpoint, relative to the base URL.
pub const DEFAULT_RESULTS_PATH: &str = "/results/";
/// Path of the forecast table endpoint, relative to the base URL.
pub const DEFAULT_TABLE_PATH: &str = "/results/table/";

/// Shortest forecast horizon the service accepts, in days.
pub const MIN_HORIZON_DAYS: u32 = 1;
/// Longest forecast horizon the service accepts, in days.
pub const MAX_HORIZON_DAYS: u32 = 180;

/// Where to send results and table requests.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    results_url: Url,
    table_url: Url,
    horizon: Option<u32>,
}

impl EndpointConfig {
    /// Configuration with the default endpoint paths under `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_paths(base_url, DEFAULT_RESULTS_PATH, DEFAULT_TABLE_PATH)
    }

    pub fn with_paths(
        base_url: &str,
        results_path: &str,
        table_path: &str,
    ) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot be used as a base".to_string(),
            });
        }

        let join = |path: &str| {
            base.join(path).map_err(|e| ConfigError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            results_url: join(results_path)?,
            table_url: join(table_path)?,
            horizon: None,
        })
    }

    /// Append `horizon=<days>` to every request. `None` leaves the server default.
    pub fn with_horizon(mut self, horizon: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(value) = horizon {
            if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&value) {
                return Err(ConfigError::HorizonOutOfRange {
                    value,
                    min: MIN_HORIZON_DAYS,
                    max: MAX_HORIZON_DAYS,
                });
            }
        }
        self.horizon = horizon;
        Ok(self)
    }

    pub fn results_url(&self) -> &Url {
        &self.results_url
    }

    pub fn table_url(&self) -> &Url {
        &self.table_url
    }

    pub fn horizon(&self) -> Option<u32> {
        self.horizon
    }

    /// Full request URL for `target`.
    ///
    /// `province` is only appended when non-empty; `"All"` is sent literally.
    pub fn request_url(&self, target: FetchTarget, province: &str) -> Url {
        let mut url = match target {
            FetchTarget::Results => self.results_url.clone(),
            FetchTarget::Table => self.table_url.clone(),
        };

        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !province.is_empty() {
            pairs.push(("province", province.to_string()));
        }
        if let Some(horizon) = self.horizon {
            pairs.push(("horizon", horizon.to_string()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}
