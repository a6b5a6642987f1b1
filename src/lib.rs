//! # rust-2048
//!
//! A minimal single-player sliding-tile merge puzzle.
//!
//! ## Design Principles
//!
//! 1. **One Rank Utility**: Every conversion between a cell's `(x, y)`
//!    position and its linear rank goes through `Position`.
//!
//! 2. **Total Operations**: Nothing in the game logic fails. Unknown move
//!    symbols are ignored, not reported.
//!
//! 3. **Explicit Randomness**: All spawning draws from a `GameRng` owned by
//!    the grid, so a fixed seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Positions, tiles, directions, spawn configuration, RNG
//! - `grid`: The 4×4 board, shift-and-merge moves, snapshots for rendering
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameRng, Grid, GridConfig};
//!
//! let mut grid = Grid::with_config(GridConfig::default(), GameRng::new(7));
//! let before = grid.total_value();
//!
//! grid.make_move(Direction::Up);
//! assert!(grid.total_value() >= before);
//!
//! // Unknown symbols are a no-op
//! let snapshot = grid.snapshot();
//! assert!(!grid.make_move_symbol('x'));
//! assert_eq!(grid.snapshot(), snapshot);
//! ```

pub mod core;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{
    Position, Tile, Direction, ParseDirectionError,
    GridConfig, GameRng,
    CELL_COUNT, SIDE_LENGTH,
};

pub use crate::grid::{Grid, GridSnapshot};
