//! Cell identity: 1-based `(x, y)` positions and their linear rank.
//!
//! ## Rank Layout
//!
//! Cells are numbered row by row, left to right, top to bottom:
//!
//! ```text
//!  1  2  3  4
//!  5  6  7  8
//!  9 10 11 12
//! 13 14 15 16
//! ```
//!
//! `rank = SIDE_LENGTH * (y - 1) + x`. Every conversion between the two
//! views goes through this module.
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::Position;
//!
//! let pos = Position::new(3, 2);
//! assert_eq!(pos.rank(), 7);
//! assert_eq!(Position::from_rank(7), pos);
//! ```

use serde::{Deserialize, Serialize};

/// Number of cells along one side of the grid.
pub const SIDE_LENGTH: u8 = 4;

/// Total number of cells in the grid.
pub const CELL_COUNT: usize = (SIDE_LENGTH as usize) * (SIDE_LENGTH as usize);

/// A 1-based cell position.
///
/// `x` is the horizontal position (column, left to right) and `y` the
/// vertical position (row, top to bottom). Both are in `1..=SIDE_LENGTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal position (1 = leftmost column).
    pub x: u8,
    /// Vertical position (1 = top row).
    pub y: u8,
}

impl Position {
    /// Create a position from 1-based coordinates.
    ///
    /// Panics if either coordinate is outside `1..=SIDE_LENGTH`.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!((1..=SIDE_LENGTH).contains(&x), "x must be in 1..=4, got {}", x);
        assert!((1..=SIDE_LENGTH).contains(&y), "y must be in 1..=4, got {}", y);
        Self { x, y }
    }

    /// Recover the position of a 1-based rank.
    ///
    /// Panics if `rank` is outside `1..=16`.
    #[must_use]
    pub fn from_rank(rank: u8) -> Self {
        assert!(
            (1..=CELL_COUNT as u8).contains(&rank),
            "rank must be in 1..=16, got {}",
            rank
        );

        let y = if rank % SIDE_LENGTH == 0 {
            rank / SIDE_LENGTH
        } else {
            rank / SIDE_LENGTH + 1
        };
        let x = rank - SIDE_LENGTH * (y - 1);

        Self { x, y }
    }

    /// The 1-based linear rank of this position.
    #[must_use]
    pub const fn rank(self) -> u8 {
        SIDE_LENGTH * (self.y - 1) + self.x
    }

    /// The 0-based flat index of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank() as usize - 1
    }

    /// Iterate over all positions in ascending rank order.
    ///
    /// ```
    /// use rust_2048::core::Position;
    ///
    /// let ranks: Vec<_> = Position::all().map(Position::rank).collect();
    /// assert_eq!(ranks, (1..=16).collect::<Vec<_>>());
    /// ```
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=CELL_COUNT as u8).map(Position::from_rank)
    }

    /// Check whether two positions lie in the same column or the same row.
    ///
    /// Columns are ranks that differ by a multiple of `SIDE_LENGTH`. Rows are
    /// runs of `SIDE_LENGTH` consecutive ranks, so the last cell of one row
    /// and the first cell of the next (ranks 4 and 5) are not on a line.
    #[must_use]
    pub fn is_on_the_same_line(self, other: Position) -> bool {
        let rank = self.rank();
        let other_rank = other.rank();
        let distance = rank.abs_diff(other_rank);

        if distance % SIDE_LENGTH == 0 {
            return true;
        }

        distance < SIDE_LENGTH && (rank - 1) / SIDE_LENGTH == (other_rank - 1) / SIDE_LENGTH
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
