//! Grid configuration.
//!
//! `GridConfig` controls how new tiles appear:
//! - how likely an empty cell is to receive a tile
//! - which values a spawned tile can take, and how often each appears
//!
//! Moves spawn at half the configured percentage; the initial fill uses the
//! full percentage.

use serde::{Deserialize, Serialize};

/// Default chance (in percent) that an empty cell receives a start tile.
pub const DEFAULT_SPAWN_PERCENTAGE: u32 = 20;

/// Value of most spawned tiles.
pub const COMMON_SPAWN_VALUE: u32 = 2;

/// Value of the rarer spawned tile.
pub const OTHER_SPAWN_VALUE: u32 = 4;

/// One spawn in this many gets `OTHER_SPAWN_VALUE`.
pub const OTHER_SPAWN_ODDS: u32 = 3;

/// Spawn parameters for a grid.
///
/// ```
/// use rust_2048::core::GridConfig;
///
/// let config = GridConfig::new().with_spawn_percentage(50);
/// assert_eq!(config.spawn_percentage, 50);
/// assert_eq!(config.move_spawn_percentage(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Chance (0-100) that an empty cell is filled at construction.
    pub spawn_percentage: u32,

    /// Value given to most spawned tiles.
    pub common_value: u32,

    /// Value given to one spawn in `other_value_odds`.
    pub other_value: u32,

    /// Denominator of the chance to spawn `other_value` instead of
    /// `common_value`.
    pub other_value_odds: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spawn_percentage: DEFAULT_SPAWN_PERCENTAGE,
            common_value: COMMON_SPAWN_VALUE,
            other_value: OTHER_SPAWN_VALUE,
            other_value_odds: OTHER_SPAWN_ODDS,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the default spawn rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spawn percentage. Zero disables spawning entirely.
    #[must_use]
    pub fn with_spawn_percentage(mut self, percentage: u32) -> Self {
        assert!(percentage <= 100, "Spawn percentage must be at most 100");
        self.spawn_percentage = percentage;
        self
    }

    /// Set the common and rare spawn values.
    #[must_use]
    pub fn with_spawn_values(mut self, common: u32, other: u32) -> Self {
        assert!(common > 0 && other > 0, "Spawn values must be positive");
        self.common_value = common;
        self.other_value = other;
        self
    }

    /// Set how rare `other_value` is (one spawn in `odds`).
    #[must_use]
    pub fn with_other_value_odds(mut self, odds: u32) -> Self {
        assert!(odds > 0, "Other value odds must be at least 1");
        self.other_value_odds = odds;
        self
    }

    /// Spawn percentage used after each move.
    #[must_use]
    pub fn move_spawn_percentage(&self) -> u32 {
        self.spawn_percentage / 2
    }
}
