//! Core game types: positions, tiles, directions, configuration, RNG.
//!
//! These are the leaves the grid is built from. Nothing here knows about
//! the grid as a whole.

pub mod position;
pub mod tile;
pub mod direction;
pub mod config;
pub mod rng;

pub use position::{Position, CELL_COUNT, SIDE_LENGTH};
pub use tile::Tile;
pub use direction::{Direction, ParseDirectionError};
pub use config::GridConfig;
pub use rng::GameRng;
