use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Catalog service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Host the search endpoint is served from (no trailing path).
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// Host the detail endpoint is served from (no trailing path).
    #[serde(default = "default_detail_base_url")]
    pub detail_base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_base_url: default_search_base_url(),
            detail_base_url: default_detail_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_search_base_url() -> String {
    "http://www.boardgamegeek.com".to_string()
}

fn default_detail_base_url() -> String {
    "https://boardgamegeek.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("boardfetch/{}", env!("CARGO_PKG_VERSION"))
}

/// Batch input configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Header of the column holding game names.
    #[serde(default = "default_name_column")]
    pub name_column: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
        }
    }
}

fn default_name_column() -> String {
    "Board Games".to_string()
}
