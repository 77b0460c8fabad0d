/// Error types for the results client
use std::fmt;
use thiserror::Error;

/// Shown when a results fetch fails without a server-supplied message.
pub const RESULTS_FALLBACK_MESSAGE: &str = "Failed to load results.";

/// Shown when a table fetch fails without a server-supplied message.
pub const TABLE_FALLBACK_MESSAGE: &str = "Failed to load forecast table.";

/// Which of the two endpoints a request was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    Results,
    Table,
}

impl FetchTarget {
    /// Generic message used when the server gives no usable `error` field.
    pub fn fallback_message(self) -> &'static str {
        match self {
            FetchTarget::Results => RESULTS_FALLBACK_MESSAGE,
            FetchTarget::Table => TABLE_FALLBACK_MESSAGE,
        }
    }
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::Results => f.write_str("results"),
            FetchTarget::Table => f.write_str("table"),
        }
    }
}

/// A failed results or table fetch.
///
/// Every variant collapses to a single human-readable string through
/// [`FetchError::user_message`]; the variants only matter for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network failure, CORS, aborted).
    #[error("{target} request failed: {detail}")]
    Transport { target: FetchTarget, detail: String },

    /// The server answered with a non-2xx status.
    #[error("{target} request returned HTTP {status}")]
    Status {
        target: FetchTarget,
        status: u16,
        /// The `error` field of the JSON body, if there was one.
        message: Option<String>,
    },

    /// A 2xx body that does not match the expected payload shape.
    #[error("{target} response could not be parsed: {detail}")]
    Malformed { target: FetchTarget, detail: String },
}

impl FetchError {
    pub fn target(&self) -> FetchTarget {
        match self {
            FetchError::Transport { target, .. }
            | FetchError::Status { target, .. }
            | FetchError::Malformed { target, .. } => *target,
        }
    }

    /// Text to show the user: the server's `error` string, else the fallback.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.target().fallback_message().to_string(),
        }
    }
}

/// Invalid endpoint configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid endpoint path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("horizon must be between {min} and {max} days (got {value})")]
    HorizonOutOfRange { value: u32, min: u32, max: u32 },
}

/// Type alias for fetch results
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_server_message() {
        let err = FetchError::Status {
            target: FetchTarget::Results,
            status: 404,
            message: Some("no model".to_string()),
        };
        assert_eq!(err.user_message(), "no model");
    }

    #[test]
    fn test_blank_server_message_uses_fallback() {
        let err = FetchError::Status {
            target: FetchTarget::Table,
            status: 500,
            message: Some("   ".to_string()),
        };
        assert_eq!(err.user_message(), TABLE_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_transport_and_malformed_use_fallback() {
        let transport = FetchError::Transport {
            target: FetchTarget::Results,
            detail: "connection refused".to_string(),
        };
        assert_eq!(transport.user_message(), RESULTS_FALLBACK_MESSAGE);
        assert_eq!(
            transport.to_string(),
            "results request failed: connection refused"
        );

        let malformed = FetchError::Malformed {
            target: FetchTarget::Table,
            detail: "missing field `forecast_table`".to_string(),
        };
        assert_eq!(malformed.user_message(), TABLE_FALLBACK_MESSAGE);
    }
}
