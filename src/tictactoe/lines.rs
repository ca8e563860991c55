//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Move, Player, board::SIZE};

const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

/// The 8 winning triples on the 3x3 board
pub const WINNING_LINES: [[Move; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)], // rows
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)], // columns
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[[Cell; SIZE]; SIZE], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|mv| cells[mv.row][mv.col] == target))
    }

    /// Find all cells that would immediately win for the player, row-major
    pub fn winning_moves(cells: &[[Cell; SIZE]; SIZE], player: Player) -> Vec<Move> {
        let mut moves: Vec<Move> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning cell in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[[Cell; SIZE]; SIZE],
        player: Player,
        line: &[Move; 3],
    ) -> Option<Move> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &mv in line {
            match cells[mv.row][mv.col] {
                Cell::Empty => {
                    if empty.is_some() {
                        return None;
                    }
                    empty = Some(mv);
                }
                c if c == target => count += 1,
                _ => return None, // opponent piece in line
            }
        }

        if count == 2 { empty } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(marks: &[(usize, usize, Cell)]) -> [[Cell; SIZE]; SIZE] {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for &(row, col, cell) in marks {
            cells[row][col] = cell;
        }
        cells
    }

    #[test]
    fn every_line_is_distinct_and_in_bounds() {
        for (i, line) in WINNING_LINES.iter().enumerate() {
            assert!(line.iter().all(|mv| mv.row < SIZE && mv.col < SIZE));
            for other in &WINNING_LINES[i + 1..] {
                assert_ne!(line, other);
            }
        }
        // the centre sits on 4 lines, corners on 3, edges on 2
        let through = |mv: Move| WINNING_LINES.iter().filter(|l| l.contains(&mv)).count();
        assert_eq!(through(at(1, 1)), 4);
        assert_eq!(through(at(0, 0)), 3);
        assert_eq!(through(at(0, 1)), 2);
    }

    #[test]
    fn test_has_won_vertical() {
        let cells = grid(&[(0, 2, Cell::O), (1, 2, Cell::O), (2, 2, Cell::O)]);
        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let cells = grid(&[(0, 2, Cell::X), (1, 1, Cell::X), (2, 0, Cell::X)]);
        assert!(LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_winning_moves() {
        // X.X
        // ...
        // ...
        let cells = grid(&[(0, 0, Cell::X), (0, 2, Cell::X)]);
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![at(0, 1)]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let cells = grid(&[(0, 0, Cell::X), (0, 1, Cell::X), (1, 0, Cell::X)]);
        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves, vec![at(0, 2), at(2, 0)]); // top row, left column
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let cells = grid(&[(0, 0, Cell::X), (0, 1, Cell::X), (0, 2, Cell::O)]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
