//! Catalog data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The catalog's integer key for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(GameId)
    }
}

impl From<u32> for GameId {
    fn from(id: u32) -> Self {
        GameId(id)
    }
}

/// One search result entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub id: GameId,
    /// Text of the candidate's first `name` element; `None` when it has none.
    pub title: Option<String>,
}

impl SearchCandidate {
    pub fn new(id: impl Into<GameId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
        }
    }
}

/// Aggregated metadata for one game.
///
/// Counts and times are passed through as the catalog reports them: they may
/// be negative, and `min_players` may exceed `max_players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub id: GameId,
    pub min_players: i32,
    pub max_players: i32,
    pub min_playtime: i32,
    pub max_playtime: i32,
    /// Average community weight rating (1.0 - 5.0, 0 when unrated).
    pub complexity: f64,
    pub thumbnail_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_parse_and_display() {
        let id: GameId = " 13 ".parse().unwrap();
        assert_eq!(id, GameId(13));
        assert_eq!(id.to_string(), "13");
        assert!("abc".parse::<GameId>().is_err());
        assert!("-1".parse::<GameId>().is_err());
    }

    #[test]
    fn test_record_serializes_fields_in_order() {
        let record = GameRecord {
            title: "Catan".to_string(),
            id: GameId(13),
            min_players: 3,
            max_players: 4,
            min_playtime: 60,
            max_playtime: 120,
            complexity: 2.3,
            thumbnail_url: "http://x/y.jpg".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Catan","id":13,"min_players":3,"max_players":4,"min_playtime":60,"max_playtime":120,"complexity":2.3,"thumbnail_url":"http://x/y.jpg"}"#
        );
    }
}
