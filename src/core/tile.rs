//! A single grid cell.
//!
//! A `Tile` pairs a `Position` with a value. Value 0 means the cell is
//! empty; tiles are never removed, only emptied.
//!
//! ## Merging
//!
//! Merge eligibility is asymmetric:
//! - an empty tile can absorb any other tile
//! - a non-empty tile can absorb a tile of equal value on the same line
//!
//! This lets a single scan both compact empty cells and combine equal
//! values.
//!
//! ```
//! use rust_2048::core::Tile;
//!
//! let mut left = Tile::new(1, 1, 2);
//! let mut right = Tile::new(2, 1, 2);
//!
//! assert!(left.merge(&mut right));
//! assert_eq!(left.value, 4);
//! assert_eq!(right.value, 0);
//! ```

use serde::{Deserialize, Serialize};

use super::config::GridConfig;
use super::position::Position;
use super::rng::GameRng;

/// One cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Where this tile sits.
    pub position: Position,
    /// Tile value (0 = empty).
    pub value: u32,
}

impl Tile {
    /// Create a tile at 1-based `(x, y)` with the given value.
    #[must_use]
    pub fn new(x: u8, y: u8, value: u32) -> Self {
        Self {
            position: Position::new(x, y),
            value,
        }
    }

    /// Create an empty tile at the given rank.
    #[must_use]
    pub fn at_rank(rank: u8) -> Self {
        Self {
            position: Position::from_rank(rank),
            value: 0,
        }
    }

    /// The 1-based linear rank of this tile.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.position.rank()
    }

    /// Move this tile to the cell with the given rank.
    pub fn set_position(&mut self, rank: u8) {
        self.position = Position::from_rank(rank);
    }

    /// Check if this tile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Check if `other` shares a row or column with this tile.
    #[must_use]
    pub fn is_on_the_same_line(&self, other: &Tile) -> bool {
        self.position.is_on_the_same_line(other.position)
    }

    /// Check if this tile may absorb `other`.
    ///
    /// Never true for two tiles at the same rank.
    #[must_use]
    pub fn is_possible_to_merge(&self, other: &Tile) -> bool {
        if self.rank() == other.rank() {
            return false;
        }

        self.is_empty() || (self.is_on_the_same_line(other) && self.value == other.value)
    }

    /// Absorb `other` into this tile if allowed.
    ///
    /// Adds `other.value` to this tile and empties `other`. Returns whether
    /// the merge happened. Calling it again on the same pair merges again
    /// whenever the pair is still eligible.
    pub fn merge(&mut self, other: &mut Tile) -> bool {
        if !self.is_possible_to_merge(other) {
            return false;
        }

        self.value += other.value;
        other.value = 0;
        true
    }

    /// Possibly give an empty tile a new value.
    ///
    /// Draws one sample in `0..100`; below `spawn_percentage` the tile gets
    /// `config.other_value` with probability `1 / config.other_value_odds`,
    /// otherwise `config.common_value`. Occupied tiles draw nothing.
    ///
    /// Returns whether a value was spawned.
    pub fn set_new_value(
        &mut self,
        spawn_percentage: u32,
        config: &GridConfig,
        rng: &mut GameRng,
    ) -> bool {
        if !self.is_empty() {
            return false;
        }

        if rng.gen_range(0..100) >= spawn_percentage {
            return false;
        }

        self.value = if rng.gen_bool(1.0 / f64::from(config.other_value_odds)) {
            config.other_value
        } else {
            config.common_value
        };
        true
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile#{}={}", self.rank(), self.value)
    }
}
