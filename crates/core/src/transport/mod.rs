//! HTTP transport used to reach the catalog service.
//!
//! The catalog components only need `GET url -> (status, body)`. Keeping that
//! behind a trait lets tests inject canned responses instead of a live server.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised below the HTTP status level.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be completed (DNS, connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Injected failure from a non-network transport.
    #[error("Transport failure: {0}")]
    Other(String),
}

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request/response capability the catalog components are built on.
///
/// Non-success statuses are returned as responses, not errors, so the caller
/// can report them against the game name or identifier it was looking up.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request for `url`.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
