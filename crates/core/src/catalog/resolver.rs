//! Name to identifier resolution against the search endpoint.

use std::sync::Arc;

use tracing::debug;

use crate::config::CatalogConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::markup::MarkupDocument;
use crate::transport::Transport;

use super::{CatalogError, GameId, SearchCandidate};

const SEARCH_PATH: &str = "/xmlapi/search?search=";
const CANDIDATE_TAG: &str = "boardgame";
const CANDIDATE_ID_ATTR: &str = "objectid";
const CANDIDATE_TITLE_TAG: &str = "name";

/// Escape a game name for the search query string.
///
/// Only spaces are escaped; other reserved characters pass through as is.
pub fn escape_name(name: &str) -> String {
    name.replace(' ', "%20")
}

/// Pick the identifier a search result set resolves to.
///
/// - no candidates: `None`
/// - one candidate: that candidate, whatever its title
/// - several: the first whose title equals `name` exactly, else `None`
pub fn select_candidate(name: &str, candidates: &[SearchCandidate]) -> Option<GameId> {
    match candidates {
        [] => None,
        [only] => Some(only.id),
        _ => candidates
            .iter()
            .find(|c| c.title.as_deref() == Some(name))
            .map(|c| c.id),
    }
}

/// Resolves game names to catalog identifiers.
pub struct IdentifierResolver {
    transport: Arc<dyn Transport>,
    diagnostics: Arc<dyn DiagnosticSink>,
    base_url: String,
}

impl IdentifierResolver {
    pub fn new(
        transport: Arc<dyn Transport>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: &CatalogConfig,
    ) -> Self {
        Self {
            transport,
            diagnostics,
            base_url: config.search_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search URL for `name`.
    pub fn search_url(&self, name: &str) -> String {
        format!("{}{}{}", self.base_url, SEARCH_PATH, escape_name(name))
    }

    /// Resolve `name` to an identifier.
    ///
    /// `Ok(None)` means the catalog has no unambiguous match; a
    /// [`Diagnostic::GameNotFound`] has been emitted in that case.
    pub async fn resolve(&self, name: &str) -> Result<Option<GameId>, CatalogError> {
        let url = self.search_url(name);
        debug!(name = name, url = %url, "Searching catalog");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(CatalogError::Status {
                subject: name.to_string(),
                status: response.status,
            });
        }

        let document = MarkupDocument::parse(&response.body);
        let candidates = parse_candidates(&document)?;
        debug!(name = name, candidates = candidates.len(), "Search returned");

        let resolved = select_candidate(name, &candidates);
        match resolved {
            Some(id) => debug!(name = name, id = %id, "Resolved game"),
            None => self.diagnostics.emit(&Diagnostic::GameNotFound {
                name: name.to_string(),
                candidates: candidates.len(),
            }),
        }

        Ok(resolved)
    }
}

fn parse_candidates(document: &MarkupDocument) -> Result<Vec<SearchCandidate>, CatalogError> {
    document
        .find_all(CANDIDATE_TAG)
        .into_iter()
        .map(|node| -> Result<SearchCandidate, CatalogError> {
            let raw = node.attr(CANDIDATE_ID_ATTR).unwrap_or_default();
            let id = raw
                .parse::<GameId>()
                .map_err(|_| CatalogError::InvalidCandidate {
                    value: raw.to_string(),
                })?;
            let title = node.find(CANDIDATE_TITLE_TAG).map(|n| n.text());
            Ok(SearchCandidate { id, title })
        })
        .collect()
}
