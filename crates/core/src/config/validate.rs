use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog base URLs are non-empty http(s) URLs
/// - Request timeout is not 0
/// - Batch name column is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    for (key, url) in [
        ("catalog.search_base_url", &config.catalog.search_base_url),
        ("catalog.detail_base_url", &config.catalog.detail_base_url),
    ] {
        if url.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "{} must start with http:// or https://, got '{}'",
                key, url
            )));
        }
    }

    if config.catalog.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.batch.name_column.is_empty() {
        return Err(ConfigError::ValidationError(
            "batch.name_column cannot be empty".to_string(),
        ));
    }

    Ok(())
}
