//! Move directions and key symbol parsing.
//!
//! Symbols cover both QWERTY (`w a s d`) and AZERTY (`z q s d`) layouts.
//! Anything else is not a move; callers decide what to do with `None`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward row 1.
    Up,
    /// Toward row 4.
    Down,
    /// Toward column 1.
    Left,
    /// Toward column 4.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a single key symbol.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    ///
    /// assert_eq!(Direction::from_symbol('w'), Some(Direction::Up));
    /// assert_eq!(Direction::from_symbol('Q'), Some(Direction::Left));
    /// assert_eq!(Direction::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol.to_ascii_lowercase() {
            'w' | 'z' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' | 'q' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Error returned when a string names no direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown direction: {:?}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "up" => return Ok(Direction::Up),
            "down" => return Ok(Direction::Down),
            "left" => return Ok(Direction::Left),
            "right" => return Ok(Direction::Right),
            _ => {}
        }

        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(symbol), None) => Direction::from_symbol(symbol),
            _ => None,
        };
        parsed.ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwerty_symbols() {
        assert_eq!(Direction::from_symbol('w'), Some(Direction::Up));
        assert_eq!(Direction::from_symbol('a'), Some(Direction::Left));
        assert_eq!(Direction::from_symbol('s'), Some(Direction::Down));
        assert_eq!(Direction::from_symbol('d'), Some(Direction::Right));
    }

    #[test]
    fn test_azerty_symbols() {
        assert_eq!(Direction::from_symbol('z'), Some(Direction::Up));
        assert_eq!(Direction::from_symbol('q'), Some(Direction::Left));
    }

    #[test]
    fn test_uppercase_symbols() {
        assert_eq!(Direction::from_symbol('W'), Some(Direction::Up));
        assert_eq!(Direction::from_symbol('D'), Some(Direction::Right));
    }

    #[test]
    fn test_unknown_symbols() {
        for symbol in ['x', ' ', '\n', '1', 'é'] {
            assert_eq!(Direction::from_symbol(symbol), None);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" Right ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("s".parse::<Direction>(), Ok(Direction::Down));
        assert!("sideways".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
        assert!("ws".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_matches_from_str() {
        for direction in Direction::ALL {
            let text = direction.to_string();
            assert_eq!(text.parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
        let deserialized: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Direction::Left);
    }
}
