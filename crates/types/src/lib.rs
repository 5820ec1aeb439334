//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, drivers, renderers).
//!
//! # Board Dimensions
//!
//! A board is `rows x cols` tiles holding `rows * cols / 2` pairs:
//!
//! - **Supported range**: 2 to 10 on each side
//! - **Default**: 6 x 6 (18 pairs)
//! - The product must be even; this is checked by config validation, never by the board
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep used by drivers (~60 FPS) |
//! | `RESOLVE_DELAY_MS` | 500 | Pause between the second pick and its judgment |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{BoardAction, BoardPhase, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let action = BoardAction::from_str("select:7").unwrap();
//! assert_eq!(action, BoardAction::Select(7));
//! assert_eq!(action.to_command(), "select:7");
//!
//! assert_eq!(BoardPhase::Judging.as_str(), "judging");
//! assert_eq!(DEFAULT_ROWS * DEFAULT_COLS, 36);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the second selection of a turn and its resolution (500ms)
pub const RESOLVE_DELAY_MS: u32 = 500;

/// Smallest playable side length
pub const MIN_DIMENSION: usize = 2;

/// Largest playable side length
pub const MAX_DIMENSION: usize = 10;

/// Default number of rows
pub const DEFAULT_ROWS: usize = 6;

/// Default number of columns
pub const DEFAULT_COLS: usize = 6;

/// Positional tile identifier, `0..rows*cols`
pub type TileId = usize;

/// Pair value carried by a tile, `1..=rows*cols/2`
pub type TileValue = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_fits_supported_range() {
        assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&DEFAULT_ROWS));
        assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&DEFAULT_COLS));
        assert_eq!((DEFAULT_ROWS * DEFAULT_COLS) % 2, 0);
    }

    #[test]
    fn resolve_delay_spans_several_ticks() {
        assert_eq!(RESOLVE_DELAY_MS, 500);
        assert!(RESOLVE_DELAY_MS > TICK_MS);
    }

    #[test]
    fn action_parse_is_case_insensitive() {
        assert_eq!(BoardAction::from_str("RESTART"), Some(BoardAction::Restart));
        assert_eq!(BoardAction::from_str("Select:3"), Some(BoardAction::Select(3)));
        assert_eq!(BoardAction::from_str(" select : 12 "), Some(BoardAction::Select(12)));
    }

    #[test]
    fn only_judging_blocks_input() {
        assert!(BoardPhase::Idle.accepts_input());
        assert!(BoardPhase::OneSelected.accepts_input());
        assert!(!BoardPhase::Judging.accepts_input());
    }

    #[test]
    fn action_command_round_trips() {
        for action in [BoardAction::Restart, BoardAction::Select(0), BoardAction::Select(99)] {
            assert_eq!(BoardAction::from_str(&action.to_command()), Some(action));
        }
    }

    #[test]
    fn action_parse_rejects_garbage() {
        assert_eq!(BoardAction::from_str("select"), None);
        assert_eq!(BoardAction::from_str("select:"), None);
        assert_eq!(BoardAction::from_str("select:-1"), None);
        assert_eq!(BoardAction::from_str("flip:2"), None);
    }
}

/// Per-turn phase of the board
///
/// The cycle is `Idle → OneSelected → Judging → Idle`:
/// - **Idle**: no tile is face-up and unresolved
/// - **OneSelected**: the first tile of a turn is revealed, input is open
/// - **Judging**: two tiles are revealed, input is locked until resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardPhase {
    #[default]
    Idle,
    OneSelected,
    Judging,
}

impl BoardPhase {
    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::BoardPhase;
    ///
    /// assert_eq!(BoardPhase::Idle.as_str(), "idle");
    /// assert_eq!(BoardPhase::OneSelected.as_str(), "oneSelected");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardPhase::Idle => "idle",
            BoardPhase::OneSelected => "oneSelected",
            BoardPhase::Judging => "judging",
        }
    }

    /// Whether selection input is accepted in this phase
    pub fn accepts_input(&self) -> bool {
        !matches!(self, BoardPhase::Judging)
    }
}

/// Why a selection was absorbed as a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// A turn is being judged
    Locked,
    /// The tile is already face-up in the current turn
    AlreadyRevealed,
    /// The tile belongs to a resolved pair
    AlreadyMatched,
    /// No tile with this id exists on the current board
    UnknownTile,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::Locked => "locked",
            IgnoreReason::AlreadyRevealed => "alreadyRevealed",
            IgnoreReason::AlreadyMatched => "alreadyMatched",
            IgnoreReason::UnknownTile => "unknownTile",
        }
    }
}

/// Board actions that can be applied to modify board state
///
/// These actions are used by drivers and scripted players alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardAction {
    /// Flip the tile with the given id
    Select(TileId),
    /// Deal a fresh board with the current dimensions
    Restart,
}

impl BoardAction {
    /// Parse action from a command string
    ///
    /// Accepts `restart` and `select:<id>` (case-insensitive, whitespace tolerant).
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::BoardAction;
    ///
    /// assert_eq!(BoardAction::from_str("restart"), Some(BoardAction::Restart));
    /// assert_eq!(BoardAction::from_str("select:0"), Some(BoardAction::Select(0)));
    /// assert_eq!(BoardAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower == "restart" {
            return Some(BoardAction::Restart);
        }

        let (verb, arg) = lower.split_once(':')?;
        match verb.trim() {
            "select" => arg.trim().parse::<TileId>().ok().map(BoardAction::Select),
            _ => None,
        }
    }

    /// Convert back to the command string accepted by [`BoardAction::from_str`]
    pub fn to_command(&self) -> String {
        match self {
            BoardAction::Select(id) => format!("select:{}", id),
            BoardAction::Restart => String::from("restart"),
        }
    }
}
