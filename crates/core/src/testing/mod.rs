//! Testing utilities and mock implementations.
//!
//! This module provides an in-memory [`Transport`](crate::transport::Transport)
//! and response builders, allowing the catalog and batch components to be
//! exercised without a network.
//!
//! # Example
//!
//! ```rust,ignore
//! use boardfetch_core::testing::{fixtures, MockTransport};
//!
//! let transport = MockTransport::new();
//! transport.respond(
//!     "http://www.boardgamegeek.com/xmlapi/search?search=Catan",
//!     200,
//!     fixtures::search_xml(&[(13, "Catan")]),
//! );
//! ```

mod mock_transport;

pub use crate::diagnostics::RecordingSink;
pub use mock_transport::MockTransport;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{GameId, GameRecord};

    /// Create a test record with reasonable defaults.
    pub fn game_record(title: &str, id: u32) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            id: GameId(id),
            min_players: 2,
            max_players: 4,
            min_playtime: 60,
            max_playtime: 120,
            complexity: 2.5,
            thumbnail_url: "http://x/y.jpg".to_string(),
        }
    }

    /// Build a search response listing `(objectid, name)` candidates in order.
    pub fn search_xml(candidates: &[(u32, &str)]) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <boardgames termsofuse=\"https://boardgamegeek.com/xmlapi/termsofuse\">\n",
        );
        for (id, name) in candidates {
            xml.push_str(&format!(
                "  <boardgame objectid=\"{}\">\n    <name primary=\"true\">{}</name>\n    <yearpublished>2000</yearpublished>\n  </boardgame>\n",
                id,
                escape(name)
            ));
        }
        xml.push_str("</boardgames>\n");
        xml
    }

    /// Build a detail response (with statistics) describing `record`.
    pub fn detail_xml(record: &GameRecord) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <boardgames termsofuse=\"https://boardgamegeek.com/xmlapi/termsofuse\">\n\
             <boardgame objectid=\"{id}\">\n\
             <yearpublished>1995</yearpublished>\n\
             <minplayers>{min_players}</minplayers>\n\
             <maxplayers>{max_players}</maxplayers>\n\
             <playingtime>{max_playtime}</playingtime>\n\
             <minplaytime>{min_playtime}</minplaytime>\n\
             <maxplaytime>{max_playtime}</maxplaytime>\n\
             <age>10</age>\n\
             <name sortindex=\"1\">{title} (alternate)</name>\n\
             <name primary=\"true\" sortindex=\"1\">{title}</name>\n\
             <description>A game.</description>\n\
             <thumbnail>{thumbnail}</thumbnail>\n\
             <statistics page=\"1\">\n\
             <ratings>\n\
             <usersrated>1000</usersrated>\n\
             <average>7.1</average>\n\
             <averageweight>{complexity}</averageweight>\n\
             </ratings>\n\
             </statistics>\n\
             </boardgame>\n\
             </boardgames>\n",
            id = record.id,
            min_players = record.min_players,
            max_players = record.max_players,
            min_playtime = record.min_playtime,
            max_playtime = record.max_playtime,
            title = escape(&record.title),
            thumbnail = escape(&record.thumbnail_url),
            complexity = record.complexity,
        )
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}
