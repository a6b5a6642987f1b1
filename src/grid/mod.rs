//! The 4×4 board and its move algorithms.
//!
//! - `board`: tile storage, construction, spawning, move dispatch
//! - `shift`: the four directional shift-and-merge operations
//! - `snapshot`: read-only values for renderers

mod board;
mod shift;
mod snapshot;

pub use board::Grid;
pub use snapshot::GridSnapshot;
