//! Typed error for the bootstrap fetch.

use thiserror::Error;

/// Error returned by a bootstrap document fetch (curl failure, HTTP error,
/// oversized body, or malformed JSON). Surfaced to the caller instead of
/// leaving the startup flow hanging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Response body exceeded the configured cap; the transfer was aborted.
    #[error("body too large: received {received} bytes, cap is {limit}")]
    BodyTooLarge { limit: u64, received: u64 },
    /// Response body was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Base URL or resource path does not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
