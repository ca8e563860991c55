//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Move, PieceCount, Player};
pub use game::{Game, Outcome, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
