//! High-level game management

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, Move, Player};
use crate::{Error, Result, search::Searcher};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub player: Player,
    pub mv: Move,
}

/// Outcome of a board, derived from its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// A game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    initial: Board,
    current: Board,
    moves: Vec<PlayedMove>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Game {
            initial: board,
            current: board,
            moves: Vec::new(),
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Moves played so far, oldest first
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.current.outcome()
    }

    /// Play a move for whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game has finished, and propagates
    /// the errors of [`Board::apply_move`].
    pub fn play(&mut self, mv: Move) -> Result<()> {
        if self.current.is_terminal() {
            return Err(Error::GameOver);
        }

        let player = self.current.turn();
        self.current = self.current.apply_move(mv)?;
        self.moves.push(PlayedMove { player, mv });
        debug!(%player, %mv, ply = self.moves.len(), "move played");

        let outcome = self.current.outcome();
        if outcome.is_finished() {
            debug!(%outcome, plies = self.moves.len(), "game finished");
        }
        Ok(())
    }

    /// Let the searcher pick every move for both sides until the game ends.
    pub fn self_play(&mut self, searcher: &mut Searcher) -> Result<Outcome> {
        while let Some(mv) = searcher.best_move(&self.current) {
            self.play(mv)?;
        }
        Ok(self.outcome())
    }

    /// The sequence of boards from the initial position to the current one
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move no longer applies, which indicates
    /// corrupted game data (for example a hand-edited serialized game).
    pub fn states(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);
        for played in &self.moves {
            board = board.apply_move(played.mv)?;
            states.push(board);
        }
        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
