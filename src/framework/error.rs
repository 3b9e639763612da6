//! # Transport Errors
//!
//! Failures raised below the HTTP status line: the request never produced a
//! response (connection refused, DNS, timeout) or the response body could not
//! be read. Clients wrap these in [`NetworkError`](crate::error::NetworkError).

/// Errors produced by an [`HttpTransport`](crate::framework::HttpTransport).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TransportError {
    /// The remote host could not be reached.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request or body read exceeded the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The endpoint URL could not be built from the configured base.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Any other failure while sending the request or reading the body.
    #[error("Transport error: {0}")]
    Other(String),
}
