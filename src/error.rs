//! Error types for the solver crate

use thiserror::Error;

/// Main error type for the solver crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
