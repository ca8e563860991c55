//! Common test utilities for the solver test suite.
//!
//! Provides exhaustive enumeration of reachable positions and an unpruned,
//! memoized reference solver used to check the search engine.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use ttt_solver::{Board, Move, Player};

/// Every board reachable from the empty board by legal play, empty board first.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        if board.is_terminal() {
            continue;
        }
        for mv in board.legal_moves() {
            stack.push(board.apply_move(mv).expect("legal move must apply"));
        }
    }

    order
}

/// Plain minimax with a transposition table.
#[derive(Default)]
pub struct ReferenceSolver {
    memo: HashMap<Board, i8>,
}

impl ReferenceSolver {
    pub fn value(&mut self, board: &Board) -> i8 {
        if let Some(&value) = self.memo.get(board) {
            return value;
        }

        let value = if board.is_terminal() {
            board.utility()
        } else {
            let children = board
                .legal_moves()
                .into_iter()
                .map(|mv| board.apply_move(mv).expect("legal move must apply"))
                .collect::<Vec<_>>();
            let values = children.iter().map(|child| self.value(child));
            let best = match board.turn() {
                Player::X => values.max(),
                Player::O => values.min(),
            };
            best.expect("non-terminal board has moves")
        };

        self.memo.insert(*board, value);
        value
    }

    /// All moves that secure the board's value
    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Move> {
        let target = self.value(board);
        board
            .legal_moves()
            .into_iter()
            .filter(|&mv| {
                let child = board.apply_move(mv).expect("legal move must apply");
                self.value(&child) == target
            })
            .collect()
    }
}

pub fn board(s: &str) -> Board {
    Board::from_string(s).expect("test board must parse")
}

pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("test move must be in bounds")
}
