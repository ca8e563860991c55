//! Exact Tic-Tac-Toe solver
//!
//! This crate provides:
//! - An immutable 3x3 board model with turn, legal move, winner and utility queries
//! - Move application that returns new boards and rejects occupied cells
//! - Minimax search with pruning that finds a game-theoretically optimal move
//! - A game record for playing positions out and a small command-line front end
//!
//! ```
//! use ttt_solver::{Board, Move, search};
//!
//! let board = Board::new().apply_move(Move::new(1, 1)?)?;
//! assert_eq!(search::game_value(&board), 0);
//! assert!(search::best_move(&board).is_some());
//! # Ok::<(), ttt_solver::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchConfig, SearchStats, Searcher};
pub use tictactoe::{Board, Cell, Game, Move, Outcome, Player};
