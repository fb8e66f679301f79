use thiserror::Error;

use crate::board::Coord;
use crate::player::Color;

/// Reasons a move or game setup is rejected.
///
/// A rejected call never changes the game, so every variant is safe to
/// report back to the caller and retry with different input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is over, {winner} already won")]
    GameOver { winner: String },
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: String, actual: String },
    #[error("Location ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Move from {from} to {to} is neither horizontal nor vertical")]
    NotOrthogonal { from: Coord, to: Coord },
    #[error("Source and destination are both {at}")]
    ZeroDistance { at: Coord },
    #[error("Cannot move {count} pieces from a stack of {height}")]
    InvalidPieceCount { count: usize, height: usize },
    #[error("Top piece at {at} is not {color}")]
    NotStackOwner { at: Coord, color: Color },
    #[error("Moving {count} pieces cannot travel {distance} spaces")]
    DistanceExceedsCount { distance: usize, count: usize },
    #[error("{name} has no pieces in reserve")]
    EmptyReserve { name: String },
    #[error("Both players are named {0}")]
    DuplicateName(String),
    #[error("Both players use color {0}")]
    DuplicateColor(Color),
    #[error("Invalid rules: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
