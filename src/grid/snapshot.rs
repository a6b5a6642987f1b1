//! Read-only view of the grid for renderers.
//!
//! A `GridSnapshot` is a plain copy of the 16 tile values in row-major rank
//! order. Renderers (console, JSON, GUI) consume it and can never mutate the
//! grid through it.

use serde::{Deserialize, Serialize};

use crate::core::position::{CELL_COUNT, SIDE_LENGTH};
use crate::core::Position;

/// Tile values in rank order (index 0 = rank 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSnapshot {
    values: [u32; CELL_COUNT],
}

impl GridSnapshot {
    /// Wrap values given in rank order.
    #[must_use]
    pub const fn new(values: [u32; CELL_COUNT]) -> Self {
        Self { values }
    }

    /// All values in rank order.
    #[must_use]
    pub fn values(&self) -> &[u32; CELL_COUNT] {
        &self.values
    }

    /// Value at a position.
    #[must_use]
    pub fn get(&self, position: Position) -> u32 {
        self.values[position.index()]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.values.chunks(SIDE_LENGTH as usize)
    }

    /// Sum of all values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == 0).count()
    }

    /// Largest value on the grid (0 for an empty grid).
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

impl From<GridSnapshot> for [u32; CELL_COUNT] {
    fn from(snapshot: GridSnapshot) -> Self {
        snapshot.values
    }
}

impl std::fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_value().to_string().len().max(1);

        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", v, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridSnapshot {
        GridSnapshot::new([2, 0, 0, 4, 0, 16, 0, 0, 0, 0, 2, 0, 128, 0, 0, 0])
    }

    #[test]
    fn test_get_by_position() {
        let snap = sample();
        assert_eq!(snap.get(Position::new(1, 1)), 2);
        assert_eq!(snap.get(Position::new(4, 1)), 4);
        assert_eq!(snap.get(Position::new(2, 2)), 16);
        assert_eq!(snap.get(Position::new(1, 4)), 128);
    }

    #[test]
    fn test_rows() {
        let rows: Vec<_> = sample().rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec![2, 0, 0, 4]);
        assert_eq!(rows[3], vec![128, 0, 0, 0]);
    }

    #[test]
    fn test_aggregates() {
        let snap = sample();
        assert_eq!(snap.total(), 152);
        assert_eq!(snap.empty_count(), 11);
        assert_eq!(snap.max_value(), 128);
    }

    #[test]
    fn test_empty_grid() {
        let snap = GridSnapshot::new([0; CELL_COUNT]);
        assert_eq!(snap.total(), 0);
        assert_eq!(snap.empty_count(), 16);
        assert_eq!(snap.max_value(), 0);
        assert_eq!(format!("{}", snap), ". . . .\n. . . .\n. . . .\n. . . .\n");
    }

    #[test]
    fn test_display_pads_to_widest() {
        let rendered = format!("{}", sample());
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "  2   .   .   4");
        assert_eq!(lines[3], "128   .   .   .");
    }

    #[test]
    fn test_into_array() {
        let values: [u32; CELL_COUNT] = sample().into();
        assert_eq!(values[5], 16);
    }

    #[test]
    fn test_serialization() {
        let snap = sample();
        let json = serde_json::to_string(&snap).unwrap();
        let deserialized: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, deserialized);
    }
}
