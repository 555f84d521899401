//! Sequential batch processor.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{CatalogClient, GameRecord};
use crate::config::{BatchConfig, Config};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::transport::Transport;

use super::BatchError;

/// Outcome of a completed batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    /// One record per resolved row, in row order.
    pub records: Vec<GameRecord>,
    /// Names of rows that did not resolve, in row order.
    pub failures: Vec<String>,
}

/// Maps the name column of a CSV input through the catalog.
///
/// Rows run one after another. An unresolved name skips its row; any catalog
/// error (transport, status, malformed detail) aborts the whole batch.
pub struct BatchProcessor {
    catalog: CatalogClient,
    diagnostics: Arc<dyn DiagnosticSink>,
    name_column: String,
}

impl BatchProcessor {
    pub fn new(
        catalog: CatalogClient,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: &BatchConfig,
    ) -> Self {
        Self {
            catalog,
            diagnostics,
            name_column: config.name_column.clone(),
        }
    }

    /// Build the processor and its catalog client from `config`.
    pub fn from_config(
        transport: Arc<dyn Transport>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: &Config,
    ) -> Self {
        let catalog =
            CatalogClient::from_config(transport, Arc::clone(&diagnostics), &config.catalog);
        Self::new(catalog, diagnostics, &config.batch)
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Process the CSV file at `path`. The file is closed on every exit path.
    pub async fn process_batch(&self, path: &Path) -> Result<BatchResult, BatchError> {
        let file = File::open(path).map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Processing batch");
        self.process_reader(file).await
    }

    /// Process CSV data from any reader. The first row must be a header.
    pub async fn process_reader<R: Read>(&self, source: R) -> Result<BatchResult, BatchError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let column = reader
            .headers()?
            .iter()
            .position(|header| header == self.name_column)
            .ok_or_else(|| BatchError::MissingColumn(self.name_column.clone()))?;

        let mut result = BatchResult::default();

        for (index, row) in reader.records().enumerate() {
            let row = row?;
            // Short rows read as an empty name.
            let name = row.get(column).unwrap_or_default();
            debug!(name = name, row = index + 1, "Processing row");

            match self.catalog.lookup(name).await? {
                Some(record) => result.records.push(record),
                None => result.failures.push(name.to_string()),
            }
        }

        for name in &result.failures {
            self.diagnostics.emit(&Diagnostic::GameNotAdded { name: name.clone() });
        }

        info!(
            added = result.records.len(),
            skipped = result.failures.len(),
            "Batch complete"
        );
        Ok(result)
    }
}
