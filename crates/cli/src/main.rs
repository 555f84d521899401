mod args;
mod output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boardfetch_core::{
    load_config, load_config_from_env, validate_config, BatchProcessor, Config, ConsoleSink,
    DiagnosticSink, ReqwestTransport, Transport,
};

use args::{Cli, Command};
use output::write_records;

/// Config file used when neither --config nor BOARDFETCH_CONFIG is given.
const DEFAULT_CONFIG_PATH: &str = "boardfetch.toml";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(cli.config.as_deref())?;
    validate_config(&config).context("Configuration validation failed")?;

    let transport: Arc<dyn Transport> = Arc::new(
        ReqwestTransport::new(&config.catalog).context("Failed to create HTTP transport")?,
    );
    let diagnostics: Arc<dyn DiagnosticSink> = Arc::new(ConsoleSink);
    let processor = BatchProcessor::from_config(transport, diagnostics, &config);

    match cli.command {
        Command::Lookup { names, format } => {
            let mut records = Vec::new();
            for name in &names {
                if let Some(record) = processor
                    .catalog()
                    .lookup(name)
                    .await
                    .with_context(|| format!("Lookup failed for '{}'", name))?
                {
                    records.push(record);
                }
            }
            write_records(&records, format, None)?;
        }
        Command::Batch {
            input,
            output,
            format,
        } => {
            let result = processor
                .process_batch(&input)
                .await
                .with_context(|| format!("Batch failed for {:?}", input))?;
            info!(
                added = result.records.len(),
                skipped = result.failures.len(),
                "Writing records"
            );
            write_records(&result.records, format, output.as_deref())?;
        }
    }

    Ok(())
}

/// Load the config file. When the implicit default path does not exist, only
/// defaults and `BOARDFETCH_` environment overrides apply.
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match std::env::var("BOARDFETCH_CONFIG") {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        },
    };

    if !required && !path.exists() {
        info!("No configuration file found, using defaults and environment");
        return load_config_from_env().context("Failed to load config from environment");
    }

    info!("Loading configuration from {:?}", path);
    load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_explicit_missing_config_fails() {
        let result = resolve_config(Some(Path::new("/nonexistent/boardfetch.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[batch]\nname_column = \"Games\"").unwrap();

        let config = resolve_config(Some(file.path())).unwrap();
        assert_eq!(config.batch.name_column, "Games");
    }
}
