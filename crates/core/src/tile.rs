//! Tile module - a single board cell

use serde::Serialize;

use crate::types::{TileId, TileValue};

/// One face-down, face-up, or matched card on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: TileId,
    pub value: TileValue,
    pub is_revealed: bool,
    /// Set once the pair is resolved. Implies `is_revealed`.
    pub is_matched: bool,
}

impl Tile {
    /// Create a hidden, unmatched tile
    pub const fn new(id: TileId, value: TileValue) -> Self {
        Self {
            id,
            value,
            is_revealed: false,
            is_matched: false,
        }
    }

    /// Hidden and unmatched, so a click would flip it
    pub fn is_selectable(&self) -> bool {
        !self.is_revealed && !self.is_matched
    }

    pub fn pairs_with(&self, other: &Tile) -> bool {
        self.id != other.id && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_hidden() {
        let tile = Tile::new(3, 2);
        assert_eq!(tile.id, 3);
        assert_eq!(tile.value, 2);
        assert!(!tile.is_revealed);
        assert!(!tile.is_matched);
        assert!(tile.is_selectable());
    }

    #[test]
    fn test_revealed_tile_not_selectable() {
        let mut tile = Tile::new(0, 1);
        tile.is_revealed = true;
        assert!(!tile.is_selectable());
    }

    #[test]
    fn test_pairs_with_requires_distinct_ids() {
        let a = Tile::new(0, 4);
        let b = Tile::new(5, 4);
        let c = Tile::new(6, 1);
        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&a));
        assert!(!a.pairs_with(&c));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Tile::new(1, 2)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["value"], 2);
        assert_eq!(json["isRevealed"], false);
        assert_eq!(json["isMatched"], false);
    }
}
