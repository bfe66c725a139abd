//! Typed error hierarchy for the airwatch-api crate.
//!
//! `AirWatchError` keeps each failure boundary distinct so callers can tell
//! a bad argument from a transport failure:
//! - `Configuration` and `Validation` are raised locally, before any request
//!   is sent.
//! - `Network` wraps `reqwest::Error` unmodified. Transport failures are
//!   never retried or reinterpreted.
//! - `Api` is only produced by the blob upload path and by
//!   [`ApiResponse::error_for_status`](crate::response::ApiResponse::error_for_status).
//!   Every other endpoint hands non-2xx responses back as an `ApiResponse`
//!   so the caller can inspect the status itself.

use std::path::PathBuf;

use reqwest::StatusCode;

/// Unified error type for all airwatch-api operations.
#[derive(Debug, thiserror::Error)]
pub enum AirWatchError {
    /// The client configuration is incomplete or inconsistent, e.g. neither
    /// an email/password pair nor an authorization value was supplied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required argument is structurally invalid. Raised before any
    /// request is issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The local file passed to a blob upload does not exist or is not a
    /// regular file.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The AirWatch API returned a non-success status on a path that
    /// interprets status codes.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned by the API.
        status: StatusCode,
        /// The raw response body text. May be JSON or plain text depending
        /// on the failure mode.
        body: String,
    },

    /// JSON serialization of a request body or deserialization of a
    /// response body failed.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A network-level failure (DNS, TCP, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The host or base URL does not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, AirWatchError>;
