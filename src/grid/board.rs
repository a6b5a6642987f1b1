//! The 4×4 grid: tile storage, construction, spawning, and move dispatch.
//!
//! ## States
//!
//! A grid is either *stable* (tiles sorted by rank, ranks exactly `1..=16`)
//! or *mid-move*. Mid-move states only exist inside the shift operations;
//! every public method returns with the grid stable.
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::{Direction, GameRng, GridConfig};
//! use rust_2048::grid::Grid;
//!
//! let mut grid = Grid::with_config(GridConfig::default(), GameRng::new(42));
//! grid.make_move(Direction::Left);
//!
//! let snapshot = grid.snapshot();
//! assert_eq!(snapshot.values().len(), 16);
//! ```

use std::ops::Index;

use log::{debug, trace};

use super::snapshot::GridSnapshot;
use crate::core::position::CELL_COUNT;
use crate::core::{Direction, GameRng, GridConfig, Position, Tile};

/// The game board: exactly 16 tiles plus spawn rules and RNG.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Tiles, sorted by rank whenever the grid is stable.
    pub(super) tiles: [Tile; CELL_COUNT],

    /// Spawn rules.
    config: GridConfig,

    /// Source of every spawn.
    pub(super) rng: GameRng,
}

impl Grid {
    /// Create a grid with default spawn rules, seeded from the clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GridConfig::default(), GameRng::from_time())
    }

    /// Create a grid with default spawn rules and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(GridConfig::default(), GameRng::new(seed))
    }

    /// Create a grid and fill it with random start values.
    #[must_use]
    pub fn with_config(config: GridConfig, rng: GameRng) -> Self {
        let mut grid = Self::empty(config, rng);
        let spawned = grid.generate_start_values();
        debug!("new grid (seed {}) with {} start tiles", grid.rng.seed(), spawned);
        grid
    }

    /// Create a grid holding exactly `values` (rank order), with no start
    /// spawn.
    ///
    /// ```
    /// use rust_2048::core::{GameRng, GridConfig, Position};
    /// use rust_2048::grid::Grid;
    ///
    /// let mut values = [0; 16];
    /// values[0] = 2;
    /// let grid = Grid::from_values(values, GridConfig::default(), GameRng::new(1));
    /// assert_eq!(grid[Position::new(1, 1)].value, 2);
    /// ```
    #[must_use]
    pub fn from_values(values: [u32; CELL_COUNT], config: GridConfig, rng: GameRng) -> Self {
        let mut grid = Self::empty(config, rng);
        for (tile, value) in grid.tiles.iter_mut().zip(values) {
            tile.value = value;
        }
        grid
    }

    fn empty(config: GridConfig, rng: GameRng) -> Self {
        let tiles = std::array::from_fn(|i| Tile::at_rank(i as u8 + 1));
        Self { tiles, config, rng }
    }

    /// Attempt a spawn on every tile at the full spawn percentage.
    fn generate_start_values(&mut self) -> usize {
        let percentage = self.config.spawn_percentage;
        self.spawn_all(percentage)
    }

    /// Attempt a spawn on every empty tile at half the spawn percentage.
    ///
    /// Returns the number of tiles that received a value.
    pub fn spawn_new_values(&mut self) -> usize {
        let percentage = self.config.move_spawn_percentage();
        let spawned = self.spawn_all(percentage);
        trace!("spawned {} tiles at {}%", spawned, percentage);
        spawned
    }

    fn spawn_all(&mut self, percentage: u32) -> usize {
        let Self { tiles, config, rng } = self;
        tiles
            .iter_mut()
            .filter(|tile| tile.is_empty())
            .map(|tile| tile.set_new_value(percentage, config, rng))
            .filter(|&spawned| spawned)
            .count()
    }

    // === Ordering ===

    /// Check whether tiles are in ascending rank order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.tiles.windows(2).all(|w| w[0].rank() < w[1].rank())
    }

    /// Restore ascending rank order. No-op when already sorted.
    pub fn sort_values(&mut self) {
        if self.is_sorted() {
            return;
        }
        self.tiles.sort_by_key(Tile::rank);
    }

    // === Moves ===

    /// Apply one move: sort, shift and merge, then spawn.
    pub fn make_move(&mut self, direction: Direction) {
        debug!("move {}", direction);
        match direction {
            Direction::Up => self.up_shift(),
            Direction::Down => self.down_shift(),
            Direction::Left => self.left_shift(),
            Direction::Right => self.right_shift(),
        }
    }

    /// Apply the move named by a key symbol.
    ///
    /// Unrecognized symbols leave the grid untouched. Returns whether a move
    /// was applied.
    pub fn make_move_symbol(&mut self, symbol: char) -> bool {
        match Direction::from_symbol(symbol) {
            Some(direction) => {
                self.make_move(direction);
                true
            }
            None => {
                trace!("ignoring symbol {:?}", symbol);
                false
            }
        }
    }

    // === Accessors ===

    /// All tiles in rank order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The spawn rules this grid uses.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Copy of the current values for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.tiles.map(|tile| tile.value))
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.tiles.iter().map(|tile| u64::from(tile.value)).sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, position: Position) -> &Tile {
        &self.tiles[position.index()]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
