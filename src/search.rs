//! Exact adversarial search over the full game tree.
//!
//! The search is minimax with a single pruning bound: each level receives the
//! best value the other side has already secured elsewhere and stops as soon as
//! it matches or beats it. Utilities are `1` (X wins), `0` (draw) and `-1`
//! (O wins), so X maximizes and O minimizes.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tictactoe::{Board, Move, Player};

/// Utility of a board won by X
pub const MAX_UTILITY: i8 = 1;
/// Utility of a board won by O
pub const MIN_UTILITY: i8 = -1;

/// Configuration for a [`Searcher`].
///
/// # Examples
///
/// ```
/// use ttt_solver::search::{SearchConfig, Searcher};
///
/// let exhaustive = Searcher::new(SearchConfig::new().with_pruning(false));
/// assert!(!exhaustive.config().pruning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cut branches the opponent would never allow. Disabling it walks the
    /// whole tree; the chosen move and value stay the same.
    pub pruning: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Enable or disable pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters accumulated by a [`Searcher`] across calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the roots
    pub nodes: u64,
    /// Times a level stopped early on its bound
    pub prunes: u64,
}

/// Minimax searcher
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Optimal move for the player to move, or `None` on a finished board.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.best_move_with_value(board).map(|(mv, _)| mv)
    }

    /// Exact value of the board under optimal play by both sides.
    pub fn value(&mut self, board: &Board) -> i8 {
        self.best_move_with_value(board)
            .map_or_else(|| board.utility(), |(_, value)| value)
    }

    /// Optimal move together with the game value it secures.
    ///
    /// Moves are tried in row-major order; a move replaces the current choice
    /// only when it is strictly better, so ties go to the earliest optimal
    /// cell. When every move loses, the first legal move is returned.
    pub fn best_move_with_value(&mut self, board: &Board) -> Option<(Move, i8)> {
        if board.is_terminal() {
            return None;
        }
        self.stats.nodes += 1;

        let player = board.turn();
        let goal = match player {
            Player::X => MAX_UTILITY,
            Player::O => MIN_UTILITY,
        };
        let mut best: Option<(Move, i8)> = None;

        for mv in board.legal_moves() {
            let child = board.with_mark(mv);
            let value = match player {
                Player::X => {
                    let bound = best.map_or(MIN_UTILITY, |(_, v)| v);
                    self.min_value(&child, bound)
                }
                Player::O => {
                    let bound = best.map_or(MAX_UTILITY, |(_, v)| v);
                    self.max_value(&child, bound)
                }
            };
            trace!(%player, %mv, value, "root move evaluated");

            let improves = match best {
                None => true,
                Some((_, current)) => match player {
                    Player::X => value > current,
                    Player::O => value < current,
                },
            };
            if improves {
                best = Some((mv, value));
            }
            if self.config.pruning && value == goal {
                break;
            }
        }

        if let Some((mv, value)) = best {
            debug!(
                %player,
                %mv,
                value,
                nodes = self.stats.nodes,
                prunes = self.stats.prunes,
                "best move selected"
            );
        }
        best
    }

    fn max_value(&mut self, board: &Board, bound: i8) -> i8 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut best = MIN_UTILITY;
        for mv in board.legal_moves() {
            let value = self.min_value(&board.with_mark(mv), best);
            best = best.max(value);
            if self.config.pruning && best >= bound {
                self.stats.prunes += 1;
                return best;
            }
        }
        best
    }

    fn min_value(&mut self, board: &Board, bound: i8) -> i8 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut best = MAX_UTILITY;
        for mv in board.legal_moves() {
            let value = self.max_value(&board.with_mark(mv), best);
            best = best.min(value);
            if self.config.pruning && best <= bound {
                self.stats.prunes += 1;
                return best;
            }
        }
        best
    }
}

/// Optimal move with the default configuration
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().best_move(board)
}

/// Game value with the default configuration
pub fn game_value(board: &Board) -> i8 {
    Searcher::default().value(board)
}
