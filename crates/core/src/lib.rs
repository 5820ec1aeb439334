//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the matching-pair rules: dealing a shuffled board,
//! flipping tiles, judging turns, and counting moves. It has no UI,
//! networking, or persistence, making it:
//!
//! - **Deterministic**: Same seed deals the same board (for replays and tests)
//! - **Testable**: Randomness and the judgment delay are both injectable
//! - **Portable**: Any host that can call a function and keep a clock can drive it
//!
//! # Module Structure
//!
//! - [`board`]: the board controller and its per-turn state machine
//! - [`tile`]: a single card and its face-up/matched flags
//! - [`rng`]: injectable randomness, Fisher-Yates shuffle
//! - [`config`]: board dimensions, delay, and validation
//! - [`snapshot`]: serializable copy of the board for renderers
//!
//! # Game Rules
//!
//! - **Pairs**: a `rows x cols` board holds each value `1..=rows*cols/2` exactly twice
//! - **Turns**: two picks make a turn; each turn counts one move, match or not
//! - **Judgment**: 500ms after the second pick, a pair stays face-up and a
//!   miss flips back over
//! - **Lock**: picks during the judgment delay are ignored
//! - **Cleared**: the board is done when every tile is matched
//!
//! # Example
//!
//! ```
//! use memory_match_core::{BoardConfig, BoardController};
//! use memory_match_types::RESOLVE_DELAY_MS;
//!
//! let mut board = BoardController::with_seed(BoardConfig::new(2, 2), 12345);
//!
//! // Find the two tiles carrying value 1 and pick them.
//! let ids: Vec<_> = board.tiles().iter().filter(|t| t.value == 1).map(|t| t.id).collect();
//! board.select_tile(ids[0]);
//! board.select_tile(ids[1]);
//! assert!(board.is_locked());
//! assert_eq!(board.moves(), 1);
//!
//! // Let the judgment delay pass.
//! let resolution = board.tick(RESOLVE_DELAY_MS).unwrap();
//! assert!(resolution.is_match());
//! assert_eq!(board.matched_pairs(), 1);
//! ```
//!
//! # Timing
//!
//! The board uses a fixed timestep system. Call
//! [`BoardController::tick`](board::BoardController::tick) every frame with the
//! elapsed time, or resolve a turn directly with its
//! [`ResolutionTicket`](board::ResolutionTicket).

pub mod board;
pub mod config;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{BoardController, Resolution, ResolutionTicket, SelectOutcome};
pub use config::{BoardConfig, ConfigError};
pub use rng::{entropy_seed, RandomSource, SimpleRng};
pub use snapshot::BoardSnapshot;
pub use tile::Tile;
