//! Directional shift-and-merge.
//!
//! Each shift walks every line (rows for horizontal moves, columns for
//! vertical ones) starting from the edge the tiles travel toward. For each
//! destination cell it scans the cells behind it in that line and merges
//! each eligible one into the destination:
//!
//! - an empty destination absorbs the first non-empty tile and keeps
//!   scanning, so it can still combine with a later equal value
//! - the scan for a destination ends once a merge lands on a destination
//!   that was already non-empty
//! - a tile of a different value does not end the scan
//!
//! ```text
//! [0, 2, 2, 0]  left  ->  [4, 0, 0, 0]
//! [2, 4, 2, 0]  left  ->  [4, 4, 0, 0]
//! ```
//!
//! Index arithmetic relies on the tiles being sorted by rank, so every
//! shift calls `sort_values` first.

use log::trace;

use super::board::Grid;
use crate::core::position::SIDE_LENGTH;
use crate::core::{Direction, Position, Tile};

const LINE_LEN: usize = SIDE_LENGTH as usize;

/// Ranks of one line, ordered from the edge tiles move toward.
///
/// `line` is the 1-based row (horizontal moves) or column (vertical moves).
fn line_ranks(direction: Direction, line: u8) -> [u8; LINE_LEN] {
    std::array::from_fn(|step| {
        let step = step as u8;
        let position = match direction {
            Direction::Left => Position::new(1 + step, line),
            Direction::Right => Position::new(SIDE_LENGTH - step, line),
            Direction::Up => Position::new(line, 1 + step),
            Direction::Down => Position::new(line, SIDE_LENGTH - step),
        };
        position.rank()
    })
}

impl Grid {
    /// Slide and merge every column toward row 1, then spawn.
    pub fn up_shift(&mut self) {
        self.shift(Direction::Up);
    }

    /// Slide and merge every column toward row 4, then spawn.
    pub fn down_shift(&mut self) {
        self.shift(Direction::Down);
    }

    /// Slide and merge every row toward column 4, then spawn.
    pub fn right_shift(&mut self) {
        self.shift(Direction::Right);
    }

    /// Slide and merge every row toward column 1, then spawn.
    pub fn left_shift(&mut self) {
        self.shift(Direction::Left);
    }

    fn shift(&mut self, direction: Direction) {
        self.sort_values();

        for line in 1..=SIDE_LENGTH {
            let merges = self.collapse_line(line_ranks(direction, line));
            trace!("{} line {}: {} merges", direction, line, merges);
        }

        self.spawn_new_values();
    }

    /// Merge the tiles of one line toward `ranks[0]`.
    ///
    /// Returns the number of merges that moved a non-zero value.
    fn collapse_line(&mut self, ranks: [u8; LINE_LEN]) -> usize {
        let mut merges = 0;

        for near in 0..LINE_LEN {
            for far in near + 1..LINE_LEN {
                let (dest, src) = self.pair_mut(ranks[near], ranks[far]);
                let dest_was_empty = dest.is_empty();
                let moved = src.value;

                if !dest.merge(src) {
                    continue;
                }
                if moved != 0 {
                    merges += 1;
                }
                if !dest_was_empty {
                    break;
                }
            }
        }

        merges
    }

    /// Mutable access to two distinct tiles by rank.
    fn pair_mut(&mut self, rank: u8, other_rank: u8) -> (&mut Tile, &mut Tile) {
        let a = Position::from_rank(rank).index();
        let b = Position::from_rank(other_rank).index();
        assert_ne!(a, b, "cannot borrow the same tile twice");

        if a < b {
            let (low, high) = self.tiles.split_at_mut(b);
            (&mut low[a], &mut high[0])
        } else {
            let (low, high) = self.tiles.split_at_mut(a);
            (&mut high[0], &mut low[b])
        }
    }
}
