//! Mock transport for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::transport::{HttpResponse, Transport, TransportError};

/// Mock implementation of the Transport trait.
///
/// Provides controllable behavior for testing:
/// - Return canned responses per URL (unknown URLs answer 404)
/// - Track requested URLs for assertions
/// - Simulate connection failures
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Canned responses by exact URL.
    responses: Mutex<HashMap<String, HttpResponse>>,
    /// URLs that fail at the connection level, with their error message.
    failing: Mutex<HashMap<String, String>>,
    /// Requested URLs, in order.
    requests: Mutex<Vec<String>>,
    /// If set, the next request fails with this message.
    next_error: Mutex<Option<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    /// Create a mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and `body`.
    pub fn respond(&self, url: &str, status: u16, body: impl Into<Vec<u8>>) {
        lock(&self.responses).insert(url.to_string(), HttpResponse::new(status, body));
    }

    /// Make every request to `url` fail before a response is produced.
    pub fn fail_on(&self, url: &str, message: &str) {
        lock(&self.failing).insert(url.to_string(), message.to_string());
    }

    /// Make the next request fail before a response is produced.
    pub fn fail_next(&self, message: &str) {
        *lock(&self.next_error) = Some(message.to_string());
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(url.to_string());

        if let Some(message) = lock(&self.next_error).take() {
            return Err(TransportError::Other(message));
        }
        if let Some(message) = lock(&self.failing).get(url) {
            return Err(TransportError::Other(message.clone()));
        }

        Ok(lock(&self.responses)
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "")))
    }
}
