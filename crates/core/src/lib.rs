pub mod batch;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod markup;
pub mod testing;
pub mod transport;

pub use batch::{BatchError, BatchProcessor, BatchResult};
pub use catalog::{
    escape_name, select_candidate, CatalogClient, CatalogError, DetailFetcher, GameId,
    GameRecord, IdentifierResolver, SearchCandidate,
};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, BatchConfig,
    CatalogConfig, Config, ConfigError,
};
pub use diagnostics::{ConsoleSink, Diagnostic, DiagnosticSink, RecordingSink};
pub use markup::{MarkupDocument, MarkupNode};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
