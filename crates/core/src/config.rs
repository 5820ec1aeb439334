//! Board configuration and its validation
//!
//! The board itself accepts any dimensions. Callers that take sizes from
//! users run [`BoardConfig::validate`] first.

use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION, RESOLVE_DELAY_MS};

/// Errors reported by [`BoardConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A side length is outside the playable range
    #[error("{axis} must be between {} and {}, got {value}", MIN_DIMENSION, MAX_DIMENSION)]
    DimensionOutOfRange { axis: &'static str, value: usize },

    /// `rows * cols` cannot be split into pairs
    #[error("board of {rows}x{cols} has an odd number of tiles")]
    OddTileCount { rows: usize, cols: usize },
}

/// Dimensions and timing for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between the second pick of a turn and its resolution
    pub resolve_delay_ms: u32,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_resolve_delay(mut self, delay_ms: u32) -> Self {
        self.resolve_delay_ms = delay_ms;
        self
    }

    pub fn tile_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn pair_count(&self) -> usize {
        self.tile_count() / 2
    }

    /// Check that the dimensions describe a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("rows", self.rows)?;
        check_dimension("cols", self.cols)?;

        if self.tile_count() % 2 != 0 {
            return Err(ConfigError::OddTileCount {
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            resolve_delay_ms: RESOLVE_DELAY_MS,
        }
    }
}

fn check_dimension(axis: &'static str, value: usize) -> Result<(), ConfigError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::DimensionOutOfRange { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_six_by_six() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 6);
        assert_eq!(config.resolve_delay_ms, 500);
        assert_eq!(config.pair_count(), 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_range_edges() {
        assert!(BoardConfig::new(2, 2).validate().is_ok());
        assert!(BoardConfig::new(10, 10).validate().is_ok());
        assert!(BoardConfig::new(3, 4).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            BoardConfig::new(1, 4).validate(),
            Err(ConfigError::DimensionOutOfRange {
                axis: "rows",
                value: 1
            })
        );
        assert_eq!(
            BoardConfig::new(4, 11).validate(),
            Err(ConfigError::DimensionOutOfRange {
                axis: "cols",
                value: 11
            })
        );
    }

    #[test]
    fn test_validate_rejects_odd_product() {
        assert_eq!(
            BoardConfig::new(3, 5).validate(),
            Err(ConfigError::OddTileCount { rows: 3, cols: 5 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = BoardConfig::new(0, 4).validate().unwrap_err();
        assert_eq!(err.to_string(), "rows must be between 2 and 10, got 0");

        let err = BoardConfig::new(3, 3).validate().unwrap_err();
        assert_eq!(err.to_string(), "board of 3x3 has an odd number of tiles");
    }

    #[test]
    fn test_huge_dimensions_saturate() {
        let config = BoardConfig::new(usize::MAX, 3);
        assert_eq!(config.tile_count(), usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionOutOfRange { axis: "rows", .. })
        ));
    }

    #[test]
    fn test_with_resolve_delay() {
        let config = BoardConfig::new(2, 2).with_resolve_delay(0);
        assert_eq!(config.resolve_delay_ms, 0);
        assert_eq!(config.rows, 2);
    }
}
