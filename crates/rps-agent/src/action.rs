//! Move definitions for Rock-Paper-Scissors

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::AgentError;

/// Number of distinct moves
pub const ACTION_COUNT: usize = 3;

/// A move in Rock-Paper-Scissors
///
/// Declaration order is the index order used by the value table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in index order
    pub const ALL: [Move; ACTION_COUNT] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Stable index in `0..ACTION_COUNT`
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Inverse of [`Move::index`]
    pub fn from_index(index: usize) -> Option<Move> {
        Move::ALL.get(index).copied()
    }

    /// Single-letter symbol used by match harnesses
    pub fn symbol(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    /// The move this one defeats
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Move {
    type Err = AgentError;

    /// Accepts `R`/`P`/`S` or the full names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(AgentError::UnknownSymbol(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(Move::from_index(i), Some(*m));
        }
        assert_eq!(Move::from_index(ACTION_COUNT), None);
    }

    #[test]
    fn test_beats_is_cyclic() {
        for m in Move::ALL {
            assert_ne!(m.beats(), m);
            assert_eq!(m.beats().beaten_by(), m);
            assert_eq!(m.beaten_by().beats(), m);
            // Each move beats exactly one other and loses to the remaining one
            assert_ne!(m.beats(), m.beaten_by());
        }
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("R".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("p".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("Scissors".parse::<Move>().unwrap(), Move::Scissors);
        assert_eq!(" rock ".parse::<Move>().unwrap(), Move::Rock);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "X".parse::<Move>().unwrap_err();
        assert_eq!(err, AgentError::UnknownSymbol("X".to_string()));
        assert!("".parse::<Move>().is_err());
        assert!("RP".parse::<Move>().is_err());
    }

    #[test]
    fn test_display_uses_symbol() {
        let rendered: String = Move::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, "RPS");
    }
}
