//! Error types for the `dhan-kline-proxy` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, ProxyError>`.
//!
//! [`ProxyError`] covers:
//! - **Lookup errors** — Unknown trading symbol (404)
//! - **Request errors** — Bad interval, bad time bounds, bad query string (400)
//! - **Upstream errors** — Transport failures, non-2xx statuses, DhanHQ error
//!   bodies and undecodable JSON (500)
//! - **Transcode errors** — Upstream JSON that does not have the candle shape (500)
//! - **Startup errors** — Unreadable instrument dataset or missing column, bad config
//!
//! At the HTTP boundary every variant renders as `{"detail": "..."}` with the
//! status from [`ProxyError::status_code`].

use std::error::Error as _;
use std::fmt;
use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error response returned by the DhanHQ API.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Category of the error (e.g. "Invalid Authentication").
    #[serde(default)]
    pub error_type: Option<String>,
    /// Dhan error code (e.g. "DH-901").
    #[serde(default)]
    pub error_code: Option<String>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.error_code.as_deref().unwrap_or("UNKNOWN"),
            self.error_type.as_deref().unwrap_or("Unknown Error"),
            self.error_message.as_deref().unwrap_or("No message"),
        )
    }
}

/// All possible errors produced by the proxy.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No row in the instrument dataset has this trading symbol.
    #[error("Instrument with trading symbol '{0}' not found.")]
    InstrumentNotFound(String),

    /// The interval string contains no digits.
    #[error("Invalid interval format: '{0}'")]
    InvalidInterval(String),

    /// A time bound cannot be represented as a calendar date.
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    /// The inbound query string is missing a parameter or has a bad value.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// An error response returned by the DhanHQ REST API.
    #[error("Error calling DhanHQ API: {0}")]
    Api(ApiErrorBody),

    /// DhanHQ returned an unexpected HTTP status code.
    #[error("Error calling DhanHQ API: HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("Error calling DhanHQ API")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not valid JSON.
    #[error("Error decoding JSON response from DhanHQ API")]
    UpstreamMalformed(#[source] serde_json::Error),

    /// The upstream JSON does not have the parallel-column candle shape.
    #[error("Failed to parse DhanHQ response: {0}")]
    Transcode(String),

    /// The instrument dataset could not be read or parsed.
    #[error("failed to load instrument dataset {}", path.display())]
    ScripMaster {
        /// Location of the dataset.
        path: PathBuf,
        /// Underlying CSV or I/O error.
        #[source]
        source: csv::Error,
    },

    /// The instrument dataset header lacks a required column.
    #[error("instrument dataset has no '{0}' column")]
    MissingColumn(&'static str),

    /// An error building or parsing a URL.
    #[error("invalid URL")]
    Url(#[from] url::ParseError),

    /// I/O failure outside of request handling (binding the listener, serving).
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ProxyError {
    /// HTTP status this error maps to at the facade boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InstrumentNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInterval(_) | Self::InvalidTimeRange(_) | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The error message followed by every underlying cause, `: `-separated.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();
        if status.is_server_error() {
            tracing::error!(%status, %detail, "request failed");
        } else {
            tracing::debug!(%status, %detail, "request rejected");
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProxyError>;
