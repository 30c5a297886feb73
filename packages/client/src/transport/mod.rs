//! Transport seam between the executor and the network
//!
//! The executor only needs "POST this URL with an empty body and tell me the
//! status". [`HyperTransport`] does that over HTTP/1.1; tests substitute
//! their own [`Transport`].

pub mod http1;
pub mod tls;

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;
use url::Url;

pub use http1::HyperTransport;

/// Status and body of a completed POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failures below HTTP: nothing usable came back from the endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid request target {0}")]
    InvalidTarget(String),

    #[error("failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        source: std::io::Error,
    },

    #[error("TLS handshake with {host} failed: {source}")]
    Tls { host: String, source: std::io::Error },

    #[error("TLS configuration error: {0}")]
    TlsConfig(#[from] rustls::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP protocol error: {0}")]
    Protocol(#[from] hyper::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),

    #[error("request worker thread panicked")]
    WorkerPanicked,
}

/// Performs a single POST with an empty body.
///
/// Implementations block until a response status is available. They must
/// not retry: one call is one attempt.
pub trait Transport: fmt::Debug + Send + Sync {
    /// POST `url` and return the response status and body.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when no HTTP response was obtained.
    fn post(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}
