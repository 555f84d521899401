//! BoardGameGeek XML catalog lookups.
//!
//! Two calls make up a lookup: [`IdentifierResolver`] turns a display name
//! into a [`GameId`] via the search endpoint, and [`DetailFetcher`] turns a
//! [`GameId`] into a [`GameRecord`] via the detail endpoint.

mod details;
mod resolver;
mod types;

pub use details::DetailFetcher;
pub use resolver::{escape_name, select_candidate, IdentifierResolver};
pub use types::*;

use std::sync::Arc;

use thiserror::Error;

use crate::config::CatalogConfig;
use crate::diagnostics::DiagnosticSink;
use crate::transport::{Transport, TransportError};

/// Errors that can occur when querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The catalog answered with a non-success status.
    #[error("Could not retrieve search result for {subject} due to: {status}")]
    Status { subject: String, status: u16 },

    /// A detail response lacks a required element.
    #[error("Detail response for game {id} has no <{field}> element")]
    MissingField { id: GameId, field: &'static str },

    /// A detail element could not be converted to the expected type.
    #[error("Detail response for game {id} has invalid <{field}> value '{value}'")]
    InvalidField {
        id: GameId,
        field: &'static str,
        value: String,
    },

    /// A search candidate carries a missing or non-integer identifier.
    #[error("Search result has invalid objectid '{value}'")]
    InvalidCandidate { value: String },
}

/// Resolver and fetcher sharing one transport.
pub struct CatalogClient {
    resolver: IdentifierResolver,
    fetcher: DetailFetcher,
}

impl CatalogClient {
    /// Build both components on top of `transport`.
    pub fn from_config(
        transport: Arc<dyn Transport>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: &CatalogConfig,
    ) -> Self {
        Self {
            resolver: IdentifierResolver::new(Arc::clone(&transport), diagnostics, config),
            fetcher: DetailFetcher::new(transport, config),
        }
    }

    pub fn resolver(&self) -> &IdentifierResolver {
        &self.resolver
    }

    pub fn fetcher(&self) -> &DetailFetcher {
        &self.fetcher
    }

    pub async fn resolve(&self, name: &str) -> Result<Option<GameId>, CatalogError> {
        self.resolver.resolve(name).await
    }

    pub async fn fetch_details(&self, id: GameId) -> Result<GameRecord, CatalogError> {
        self.fetcher.fetch_details(id).await
    }

    /// Resolve `name` and fetch its record. `Ok(None)` when unresolved.
    pub async fn lookup(&self, name: &str) -> Result<Option<GameRecord>, CatalogError> {
        match self.resolve(name).await? {
            Some(id) => self.fetch_details(id).await.map(Some),
            None => Ok(None),
        }
    }
}
