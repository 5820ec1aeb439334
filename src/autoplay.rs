//! Headless driver that plays a board to completion.
//!
//! The bot has perfect memory but no peeking: it only learns a tile's value by
//! flipping it. Time advances in fixed `TICK_MS` steps, the same way a frame
//! loop would drive the board.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::core::{BoardConfig, BoardController, RandomSource, Resolution, SelectOutcome};
use crate::types::{TileId, TileValue, TICK_MS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub board: BoardConfig,
    /// `None` seeds from entropy.
    pub seed: Option<u32>,
}

pub fn parse_autoplay_args(args: &[String]) -> Result<AutoplayConfig> {
    let mut config = AutoplayConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("autoplay: missing value for {}", flag))
        };
        match flag {
            "--rows" => config.board.rows = parse_number(flag, value()?)?,
            "--cols" => config.board.cols = parse_number(flag, value()?)?,
            "--delay" => config.board.resolve_delay_ms = parse_number(flag, value()?)?,
            "--seed" => config.seed = Some(parse_number(flag, value()?)?),
            other => return Err(anyhow!("autoplay: unknown argument: {}", other)),
        }
        i += 2;
    }

    config.board.validate()?;
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| anyhow!("autoplay: invalid {} value: {}", flag, raw))
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySummary {
    pub moves: u32,
    pub matches: u32,
    pub misses: u32,
    pub elapsed_ms: u64,
}

/// Remembers every value it has seen face-up
#[derive(Debug, Default)]
pub struct MemoryBot {
    seen: HashMap<TileId, TileValue>,
}

impl MemoryBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, id: TileId, value: TileValue) {
        self.seen.insert(id, value);
    }

    /// Two remembered, unmatched tiles with equal values
    fn known_pair<R: RandomSource>(&self, board: &BoardController<R>) -> Option<(TileId, TileId)> {
        let mut by_value: HashMap<TileValue, TileId> = HashMap::new();
        let mut ids: Vec<_> = self.seen.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            if !board.tile(id).is_some_and(|t| t.is_selectable()) {
                continue;
            }
            let value = self.seen[&id];
            if let Some(&other) = by_value.get(&value) {
                return Some((other, id));
            }
            by_value.insert(value, id);
        }
        None
    }

    fn known_partner<R: RandomSource>(
        &self,
        board: &BoardController<R>,
        id: TileId,
        value: TileValue,
    ) -> Option<TileId> {
        self.seen
            .iter()
            .filter(|&(&other, &v)| other != id && v == value)
            .map(|(&other, _)| other)
            .find(|&other| board.tile(other).is_some_and(|t| t.is_selectable()))
    }

    fn unseen<R: RandomSource>(&self, board: &BoardController<R>) -> Option<TileId> {
        board
            .tiles()
            .iter()
            .find(|t| t.is_selectable() && !self.seen.contains_key(&t.id))
            .map(|t| t.id)
    }

    /// Flip a tile and record what it showed
    fn flip<R: RandomSource>(&mut self, board: &mut BoardController<R>, id: TileId) -> SelectOutcome {
        let outcome = board.select_tile(id);
        if let Some(tile) = board.tile(id) {
            if tile.is_revealed {
                self.remember(id, tile.value);
            }
        }
        outcome
    }

    /// Play one turn. Returns `None` when there is nothing left to flip.
    pub fn play_turn<R: RandomSource>(
        &mut self,
        board: &mut BoardController<R>,
    ) -> Result<Option<(Resolution, u32)>> {
        let (first, second) = match self.known_pair(board) {
            Some((first, second)) => {
                self.flip(board, first);
                (first, second)
            }
            None => {
                let Some(first) = self.unseen(board) else {
                    return Ok(None);
                };
                self.flip(board, first);
                let value = board
                    .tile(first)
                    .map(|t| t.value)
                    .ok_or_else(|| anyhow!("autoplay: tile {} vanished", first))?;
                let second = match self.known_partner(board, first, value) {
                    Some(partner) => partner,
                    None => self
                        .unseen(board)
                        .ok_or_else(|| anyhow!("autoplay: no second tile for {}", first))?,
                };
                (first, second)
            }
        };

        let outcome = self.flip(board, second);
        let Some(ticket) = board.pending_ticket() else {
            return Err(anyhow!(
                "autoplay: expected turn to be judged, got {:?}",
                outcome
            ));
        };

        // Enough frames to cover the whole delay, plus one for a zero delay.
        let remaining_ms = board.remaining_delay_ms().unwrap_or(0);
        let max_ticks = remaining_ms.div_ceil(TICK_MS) + 1;
        let mut waited_ms = 0u32;
        for _ in 0..max_ticks {
            waited_ms = waited_ms.saturating_add(TICK_MS);
            if let Some(resolution) = board.tick(TICK_MS) {
                return Ok(Some((resolution, waited_ms)));
            }
        }
        debug!(turn = ticket.turn, waited_ms, "turn still pending after full delay");
        Err(anyhow!("autoplay: turn never resolved"))
    }
}

/// Play until the board is cleared
pub fn play_to_completion<R: RandomSource>(board: &mut BoardController<R>) -> Result<AutoplaySummary> {
    let mut bot = MemoryBot::new();
    let mut summary = AutoplaySummary {
        moves: 0,
        matches: 0,
        misses: 0,
        elapsed_ms: 0,
    };

    while !board.is_cleared() {
        let Some((resolution, waited_ms)) = bot.play_turn(board)? else {
            break;
        };
        summary.elapsed_ms += u64::from(waited_ms);
        if resolution.is_match() {
            summary.matches += 1;
        } else {
            summary.misses += 1;
        }
        debug!(
            turn = board.moves(),
            tiles = ?resolution.tiles(),
            matched = resolution.is_match(),
            pairs_left = board.pair_count() - board.matched_pairs(),
            "turn played"
        );
    }

    summary.moves = board.moves();
    info!(
        moves = summary.moves,
        matches = summary.matches,
        misses = summary.misses,
        elapsed_ms = summary.elapsed_ms,
        "board cleared"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse_autoplay_args(&[]).unwrap();
        assert_eq!(config, AutoplayConfig::default());
    }

    #[test]
    fn test_parse_all_flags() {
        let config = parse_autoplay_args(&args(&[
            "--rows", "4", "--cols", "5", "--seed", "9", "--delay", "100",
        ]))
        .unwrap();
        assert_eq!(config.board.rows, 4);
        assert_eq!(config.board.cols, 5);
        assert_eq!(config.board.resolve_delay_ms, 100);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_autoplay_args(&args(&["--rows"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --rows"));

        let err = parse_autoplay_args(&args(&["--cols", "x"])).unwrap_err();
        assert!(err.to_string().contains("invalid --cols value: x"));

        let err = parse_autoplay_args(&args(&["--speed", "2"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument: --speed"));
    }

    #[test]
    fn test_parse_rejects_unplayable_board() {
        let err = parse_autoplay_args(&args(&["--rows", "3", "--cols", "3"])).unwrap_err();
        assert!(err.to_string().contains("odd number of tiles"));
    }

    #[test]
    fn test_bot_only_misses_on_blind_first_picks() {
        let mut board = BoardController::with_seed(BoardConfig::new(4, 4), 77);
        let mut bot = MemoryBot::new();
        let mut misses = 0;

        loop {
            let known = bot.seen.clone();
            let Some((resolution, _)) = bot.play_turn(&mut board).unwrap() else {
                break;
            };
            let Resolution::Mismatched { first, .. } = resolution else {
                continue;
            };
            misses += 1;

            let first_tile = *board.tile(first).unwrap();
            let partner = board
                .tiles()
                .iter()
                .find(|t| t.pairs_with(&first_tile))
                .map(|t| t.id)
                .unwrap();
            assert!(!known.contains_key(&first), "turn opened on a remembered tile {}", first);
            assert!(
                !known.contains_key(&partner),
                "partner {} of tile {} was remembered",
                partner,
                first
            );
        }

        assert!(board.is_cleared());
        assert_eq!(board.moves() as usize, 8 + misses);
    }

    #[test]
    fn test_long_delay_still_resolves() {
        let config =
            parse_autoplay_args(&args(&["--rows", "2", "--cols", "2", "--delay", "200000", "--seed", "3"]))
                .unwrap();
        let mut board = BoardController::with_seed(config.board, 3);
        let summary = play_to_completion(&mut board).unwrap();

        assert!(board.is_cleared());
        assert!(summary.elapsed_ms >= u64::from(summary.moves) * 200_000);
    }

    #[test]
    fn test_zero_delay_resolves_on_first_tick() {
        let mut board = BoardController::with_seed(BoardConfig::new(2, 2).with_resolve_delay(0), 3);
        let summary = play_to_completion(&mut board).unwrap();
        assert!(board.is_cleared());
        assert_eq!(summary.elapsed_ms, u64::from(summary.moves) * u64::from(TICK_MS));
    }
}
