//! Results and table requests.
//!
//! [`ResultsSource`] is the seam the controller drivers are written against;
//! [`HttpResultsFetcher`] is the real implementation on top of `reqwest`, which
//! uses the browser's `fetch` when compiled to WASM. Nothing is cached here.

use crate::config::EndpointConfig;
use crate::error::{FetchError, FetchTarget, Result};
use crate::model::{ResultsPayload, TablePayload};
use log::{info, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Something that can answer results and table requests for a province.
#[allow(async_fn_in_trait)]
pub trait ResultsSource {
    async fn fetch_results(&self, province: &str) -> Result<ResultsPayload>;
    async fn fetch_table(&self, province: &str) -> Result<TablePayload>;
}

/// HTTP client for the results service.
#[derive(Debug, Clone)]
pub struct HttpResultsFetcher {
    client: Client,
    config: EndpointConfig,
}

impl HttpResultsFetcher {
    pub fn new(config: EndpointConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: EndpointConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, target: FetchTarget, url: Url) -> Result<T> {
        info!("Fetching {} from {}", target, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                target,
                detail: e.to_string(),
            })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| FetchError::Transport {
            target,
            detail: e.to_string(),
        })?;

        decode_response(target, status, &body).inspect_err(|e| warn!("{}", e))
    }
}

impl ResultsSource for HttpResultsFetcher {
    async fn fetch_results(&self, province: &str) -> Result<ResultsPayload> {
        let url = self.config.request_url(FetchTarget::Results, province);
        self.get_json(FetchTarget::Results, url).await
    }

    async fn fetch_table(&self, province: &str) -> Result<TablePayload> {
        let url = self.config.request_url(FetchTarget::Table, province);
        self.get_json(FetchTarget::Table, url).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// The `error` field of a failure body, if the body is JSON and has one.
pub fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

/// Turn a status code and body into a payload or a [`FetchError`].
pub fn decode_response<T: DeserializeOwned>(target: FetchTarget, status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            target,
            status,
            message: server_error_message(body),
        });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Malformed {
        target,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RESULTS_FALLBACK_MESSAGE;

    #[test]
    fn test_server_error_message() {
        assert_eq!(
            server_error_message(r#"{"error": "no model"}"#).as_deref(),
            Some("no model")
        );
        assert_eq!(server_error_message(r#"{"detail": "nope"}"#), None);
        assert_eq!(server_error_message(r#"{"error": ""}"#), None);
        assert_eq!(server_error_message("<html>502 Bad Gateway</html>"), None);
    }

    #[test]
    fn test_decode_success() {
        let table: TablePayload = decode_response(
            FetchTarget::Table,
            200,
            r#"{"forecast_table": "<table><tr><td>1</td></tr></table>"}"#,
        )
        .unwrap();
        assert_eq!(table.forecast_table, "<table><tr><td>1</td></tr></table>");
    }

    #[test]
    fn test_decode_error_status() {
        let err = decode_response::<ResultsPayload>(
            FetchTarget::Results,
            404,
            r#"{"error": "no model"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert!(err.user_message().contains("no model"));
    }

    #[test]
    fn test_decode_error_status_unparsable_body() {
        let err = decode_response::<ResultsPayload>(FetchTarget::Results, 500, "Internal Server Error")
            .unwrap_err();
        assert_eq!(err.user_message(), RESULTS_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<ResultsPayload>(FetchTarget::Results, 200, r#"{"rmse": "high"}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Malformed { .. }));
        assert_eq!(err.user_message(), RESULTS_FALLBACK_MESSAGE);
    }
}
