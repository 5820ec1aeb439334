//! Render-facing copy of the board state

use serde::Serialize;

use crate::tile::Tile;
use crate::types::{BoardPhase, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub tiles: Vec<Tile>,
    pub first_selected: Option<TileId>,
    pub second_selected: Option<TileId>,
    pub locked: bool,
    pub remaining_delay_ms: Option<u32>,
    pub moves: u32,
    pub cleared: bool,
    pub generation: u32,
    pub phase: &'static str,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.tiles.clear();
        self.first_selected = None;
        self.second_selected = None;
        self.locked = false;
        self.remaining_delay_ms = None;
        self.moves = 0;
        self.cleared = false;
        self.generation = 0;
        self.phase = BoardPhase::Idle.as_str();
    }

    /// Whether a renderer should forward clicks
    pub fn accepts_input(&self) -> bool {
        !self.locked && !self.cleared
    }

    /// Tile at grid position, row-major
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col)
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        let mut s = Self {
            rows: 0,
            cols: 0,
            tiles: Vec::new(),
            first_selected: None,
            second_selected: None,
            locked: false,
            remaining_delay_ms: None,
            moves: 0,
            cleared: false,
            generation: 0,
            phase: BoardPhase::Idle.as_str(),
        };
        s.clear();
        s
    }
}
