//! Batch lookups driven by a CSV file of game names.

mod processor;

pub use processor::{BatchProcessor, BatchResult};

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that abort a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV input has no '{0}' column")]
    MissingColumn(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
