//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::CatalogConfig;

use super::{HttpResponse, Transport, TransportError};

/// Transport that performs real HTTP requests.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport using the user agent and timeout from `config`.
    pub fn new(config: &CatalogConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!(url = url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(url = url, status = status, bytes = body.len(), "Response received");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_default_config() {
        assert!(ReqwestTransport::new(&CatalogConfig::default()).is_ok());
    }
}
