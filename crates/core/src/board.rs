//! Board controller - owns the tiles and runs the per-turn state machine
//!
//! A turn is two picks followed by a judgment. The judgment is deferred by
//! `resolve_delay_ms` so both tiles stay face-up for a moment; while it is
//! pending the board is locked and every pick is ignored.
//!
//! The delay is driven with the same fixed-timestep model as the rest of the
//! workspace: call [`BoardController::tick`] with the elapsed milliseconds, or
//! hand the [`ResolutionTicket`] returned by the second pick to
//! [`BoardController::resolve`] from your own timer.
//!
//! Every deal bumps the board generation and drops any pending judgment, so a
//! ticket issued before a re-deal can never touch the new tiles.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace, warn};

use crate::config::BoardConfig;
use crate::rng::{entropy_seed, RandomSource, SimpleRng};
use crate::snapshot::BoardSnapshot;
use crate::tile::Tile;
use crate::types::{BoardAction, BoardPhase, IgnoreReason, TileId, TileValue};

/// Handle for the judgment scheduled by a turn's second pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionTicket {
    /// Board generation the turn was played in
    pub generation: u32,
    /// Move number of the turn (1-based)
    pub turn: u32,
    pub first: TileId,
    pub second: TileId,
}

/// What a call to [`BoardController::select_tile`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed
    Ignored(IgnoreReason),
    /// First tile of a turn is now face-up
    FirstRevealed(TileId),
    /// Second tile is face-up, the board is locked until the ticket resolves
    Judging(ResolutionTicket),
}

impl SelectOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}

/// Result of judging a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Both tiles share `value` and stay face-up for good
    Matched {
        first: TileId,
        second: TileId,
        value: TileValue,
    },
    /// Values differ, both tiles were turned back over
    Mismatched { first: TileId, second: TileId },
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    pub fn tiles(&self) -> [TileId; 2] {
        match *self {
            Resolution::Matched { first, second, .. } => [first, second],
            Resolution::Mismatched { first, second } => [first, second],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingResolution {
    ticket: ResolutionTicket,
    elapsed_ms: u32,
}

/// Matching-pair board state
#[derive(Debug, Clone)]
pub struct BoardController<R = SimpleRng> {
    rows: usize,
    cols: usize,
    resolve_delay_ms: u32,
    tiles: Vec<Tile>,
    /// Face-up, unresolved tiles of the current turn, in pick order.
    selected: ArrayVec<TileId, 2>,
    /// Set together with the second pick; its presence is the board lock.
    pending: Option<PendingResolution>,
    move_count: u32,
    /// Incremented by every `init_game`, tags resolution tickets.
    generation: u32,
    rng: R,
}

impl BoardController<SimpleRng> {
    /// Deterministic board: the same seed always deals the same layout
    pub fn with_seed(config: BoardConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed))
    }

    /// Seeded from entropy, returning the seed so the deal can be replayed
    pub fn from_entropy(config: BoardConfig) -> (Self, u32) {
        let seed = entropy_seed();
        (Self::with_seed(config, seed), seed)
    }
}

impl<R: RandomSource> BoardController<R> {
    /// Create a controller and deal its first board
    pub fn new(config: BoardConfig, rng: R) -> Self {
        info!(
            rows = config.rows,
            cols = config.cols,
            resolve_delay_ms = config.resolve_delay_ms,
            "new board controller"
        );

        let mut board = Self {
            rows: config.rows,
            cols: config.cols,
            resolve_delay_ms: config.resolve_delay_ms,
            tiles: Vec::new(),
            selected: ArrayVec::new(),
            pending: None,
            move_count: 0,
            generation: 0,
            rng,
        };
        board.deal(config.rows, config.cols);
        board
    }

    /// Replace the whole board with a fresh shuffled deal of `rows x cols`
    ///
    /// `rows * cols` should be even; an odd product deals `rows * cols / 2`
    /// pairs and leaves the last cell out. A product that overflows `usize`
    /// deals an empty board. A pending judgment is cancelled.
    pub fn init_game(&mut self, rows: usize, cols: usize) {
        if let Some(pending) = self.pending {
            debug!(
                generation = pending.ticket.generation,
                turn = pending.ticket.turn,
                "cancelled pending resolution"
            );
        }
        self.generation = self.generation.wrapping_add(1);
        self.deal(rows, cols);
    }

    /// Re-deal with the current dimensions
    pub fn restart(&mut self) {
        self.init_game(self.rows, self.cols);
    }

    fn deal(&mut self, rows: usize, cols: usize) {
        let pair_count = match rows.checked_mul(cols) {
            Some(tiles) => tiles / 2,
            None => {
                warn!(rows, cols, "tile count overflows, dealing an empty board");
                0
            }
        };

        let mut values: Vec<TileValue> = (1..=pair_count as TileValue)
            .flat_map(|v| [v, v])
            .collect();
        self.rng.shuffle(&mut values);

        self.tiles.clear();
        self.tiles.extend(
            values
                .into_iter()
                .enumerate()
                .map(|(id, value)| Tile::new(id, value)),
        );

        self.rows = rows;
        self.cols = cols;
        self.selected.clear();
        self.pending = None;
        self.move_count = 0;

        debug!(
            rows,
            cols,
            pairs = pair_count,
            generation = self.generation,
            "dealt board"
        );
    }

    /// Flip a tile
    ///
    /// Locked boards, face-up tiles, matched tiles and unknown ids are
    /// absorbed as no-ops. The second pick of a turn counts a move and locks
    /// the board until the returned ticket resolves.
    pub fn select_tile(&mut self, id: TileId) -> SelectOutcome {
        if self.pending.is_some() {
            return ignore(id, IgnoreReason::Locked);
        }

        let Some(tile) = self.tiles.get_mut(id) else {
            return ignore(id, IgnoreReason::UnknownTile);
        };
        if tile.is_matched {
            return ignore(id, IgnoreReason::AlreadyMatched);
        }
        if tile.is_revealed {
            return ignore(id, IgnoreReason::AlreadyRevealed);
        }

        tile.is_revealed = true;

        let Some(&first) = self.selected.first() else {
            self.selected.push(id);
            trace!(tile = id, "first tile revealed");
            return SelectOutcome::FirstRevealed(id);
        };

        self.selected.push(id);
        self.move_count += 1;

        let ticket = ResolutionTicket {
            generation: self.generation,
            turn: self.move_count,
            first,
            second: id,
        };
        self.pending = Some(PendingResolution {
            ticket,
            elapsed_ms: 0,
        });

        debug!(
            first,
            second = id,
            turn = ticket.turn,
            "second tile revealed, judging"
        );
        SelectOutcome::Judging(ticket)
    }

    /// Advance the pending judgment by `elapsed_ms`
    ///
    /// Returns the resolution once the accumulated time reaches the delay.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Resolution> {
        let pending = self.pending.as_mut()?;
        pending.elapsed_ms = pending.elapsed_ms.saturating_add(elapsed_ms);
        if pending.elapsed_ms < self.resolve_delay_ms {
            return None;
        }
        self.finish_turn()
    }

    /// Judge the turn identified by `ticket` now
    ///
    /// A ticket from an earlier generation, or for a turn that already
    /// resolved, does nothing and returns `None`.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> Option<Resolution> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => self.finish_turn(),
            _ => {
                trace!(
                    generation = ticket.generation,
                    turn = ticket.turn,
                    current_generation = self.generation,
                    "stale resolution ticket"
                );
                None
            }
        }
    }

    /// Judge whatever turn is pending, regardless of elapsed time
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        self.finish_turn()
    }

    fn finish_turn(&mut self) -> Option<Resolution> {
        let pending = self.pending.take()?;
        let ResolutionTicket { first, second, .. } = pending.ticket;
        self.selected.clear();

        let paired = match (self.tiles.get(first), self.tiles.get(second)) {
            (Some(a), Some(b)) if a.pairs_with(b) => Some(a.value),
            _ => None,
        };

        let resolution = match paired {
            Some(value) => {
                for id in [first, second] {
                    if let Some(tile) = self.tiles.get_mut(id) {
                        tile.is_matched = true;
                    }
                }
                Resolution::Matched {
                    first,
                    second,
                    value,
                }
            }
            None => {
                for id in [first, second] {
                    if let Some(tile) = self.tiles.get_mut(id) {
                        tile.is_revealed = false;
                    }
                }
                Resolution::Mismatched { first, second }
            }
        };

        debug!(
            first,
            second,
            matched = resolution.is_match(),
            moves = self.move_count,
            cleared = self.is_cleared(),
            "turn resolved"
        );
        Some(resolution)
    }

    /// Apply a board action, returning whether state changed
    pub fn apply_action(&mut self, action: BoardAction) -> bool {
        match action {
            BoardAction::Select(id) => !self.select_tile(id).is_ignored(),
            BoardAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn resolve_delay_ms(&self) -> u32 {
        self.resolve_delay_ms
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn first_selected(&self) -> Option<&Tile> {
        self.selected.first().and_then(|&id| self.tiles.get(id))
    }

    pub fn second_selected(&self) -> Option<&Tile> {
        self.selected.get(1).and_then(|&id| self.tiles.get(id))
    }

    /// True between a turn's second pick and its resolution
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the judgment currently pending, if any
    pub fn pending_ticket(&self) -> Option<ResolutionTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Time left before `tick` resolves the pending turn
    pub fn remaining_delay_ms(&self) -> Option<u32> {
        self.pending
            .map(|p| self.resolve_delay_ms.saturating_sub(p.elapsed_ms))
    }

    /// Completed turns since the last deal
    pub fn moves(&self) -> u32 {
        self.move_count
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Every tile is matched
    pub fn is_cleared(&self) -> bool {
        self.tiles.iter().all(|t| t.is_matched)
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_matched).count() / 2
    }

    pub fn phase(&self) -> BoardPhase {
        match self.selected.len() {
            0 => BoardPhase::Idle,
            1 => BoardPhase::OneSelected,
            _ => BoardPhase::Judging,
        }
    }

    /// Copy observable state into `out`, reusing its tile buffer
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.rows = self.rows;
        out.cols = self.cols;
        out.tiles.clear();
        out.tiles.extend_from_slice(&self.tiles);
        out.first_selected = self.selected.first().copied();
        out.second_selected = self.selected.get(1).copied();
        out.locked = self.is_locked();
        out.remaining_delay_ms = self.remaining_delay_ms();
        out.moves = self.move_count;
        out.cleared = self.is_cleared();
        out.generation = self.generation;
        out.phase = self.phase().as_str();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut out = BoardSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

fn ignore(id: TileId, reason: IgnoreReason) -> SelectOutcome {
    trace!(tile = id, reason = reason.as_str(), "selection ignored");
    SelectOutcome::Ignored(reason)
}

impl Default for BoardController<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(BoardConfig::default(), 1)
    }
}
