//! Per-identifier detail fetch against the boardgame endpoint.

use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::config::CatalogConfig;
use crate::markup::MarkupDocument;
use crate::transport::Transport;

use super::{CatalogError, GameId, GameRecord};

const DETAIL_PATH: &str = "/xmlapi/boardgame/";
const DETAIL_SUFFIX: &str = "&stats=1";

/// Fetches full game records by identifier.
pub struct DetailFetcher {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl DetailFetcher {
    pub fn new(transport: Arc<dyn Transport>, config: &CatalogConfig) -> Self {
        Self {
            transport,
            base_url: config.detail_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Detail URL for `id`, statistics included.
    pub fn detail_url(&self, id: GameId) -> String {
        format!("{}{}{}{}", self.base_url, DETAIL_PATH, id, DETAIL_SUFFIX)
    }

    /// Fetch the record for `id`.
    ///
    /// Every field is required: a missing element or one that does not parse
    /// fails the call instead of producing a partial record.
    pub async fn fetch_details(&self, id: GameId) -> Result<GameRecord, CatalogError> {
        let url = self.detail_url(id);
        debug!(id = %id, url = %url, "Fetching game details");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(CatalogError::Status {
                subject: id.to_string(),
                status: response.status,
            });
        }

        let document = MarkupDocument::parse(&response.body);
        let fields = DetailFields { document, id };

        let record = GameRecord {
            title: fields.text("name", Some(("primary", "true")))?,
            id,
            min_players: fields.number("minplayers")?,
            max_players: fields.number("maxplayers")?,
            min_playtime: fields.number("minplaytime")?,
            max_playtime: fields.number("maxplaytime")?,
            complexity: fields.number("averageweight")?,
            thumbnail_url: fields.text("thumbnail", None)?,
        };

        debug!(id = %id, title = %record.title, "Fetched game details");
        Ok(record)
    }
}

struct DetailFields {
    document: MarkupDocument,
    id: GameId,
}

impl DetailFields {
    fn text(&self, tag: &'static str, attr: Option<(&str, &str)>) -> Result<String, CatalogError> {
        self.document
            .find(tag, attr)
            .map(|node| node.text())
            .ok_or(CatalogError::MissingField {
                id: self.id,
                field: tag,
            })
    }

    fn number<T: FromStr>(&self, tag: &'static str) -> Result<T, CatalogError> {
        let raw = self.text(tag, None)?;
        raw.trim().parse().map_err(|_| CatalogError::InvalidField {
            id: self.id,
            field: tag,
            value: raw,
        })
    }
}
