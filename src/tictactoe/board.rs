//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::Outcome, lines::LineAnalyzer};
use crate::{Error, Result};

/// Side length of the grid
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move: the (row, column) of the cell to mark, both in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

/// Unchecked wire form of a [`Move`]
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = Error;

    fn try_from(raw: RawMove) -> Result<Self> {
        Move::new(raw.row, raw.col)
    }
}

impl Move {
    /// Create a move, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Move { row, col })
    }

    /// Create a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Result<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 grid of cells.
///
/// Boards are plain values: applying a move yields a new board and leaves the
/// original untouched. Whose turn it is comes from the piece counts, since X
/// always opens and the players alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Parse a board from text.
    ///
    /// The text holds 9 cell characters in row-major order; whitespace and `/`
    /// separators are ignored, so `"XO./.X./..O"` and `"XO. .X. ..O"` are both
    /// accepted. `.`, `_` and `-` mark empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The text does not contain exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts could not arise from X-first alternation
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != SIZE * SIZE {
            return Err(Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / SIZE][i % SIZE] = cell;
        }

        let count = board.counts();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Get the cell at a move's coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the move lies outside the grid.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Count pieces on the board
    pub fn counts(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.counts();
        count.x + count.o
    }

    /// The player whose turn it is: O once X is ahead, X otherwise.
    pub fn turn(&self) -> Player {
        let count = self.counts();
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// All empty cells, in row-major order.
    ///
    /// The order is fixed so that search results are reproducible.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIZE * SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    /// Mark the cell for the player to move and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the grid and
    /// [`Error::IllegalMove`] if the cell is already occupied.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board> {
        if !mv.in_bounds() {
            return Err(Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.get(mv) != Cell::Empty {
            return Err(Error::IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(self.with_mark(mv))
    }

    /// Place the current player's mark without validation.
    ///
    /// Callers guarantee `mv` came from [`Board::legal_moves`].
    pub(crate) fn with_mark(&self, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = self.turn().to_cell();
        next
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.counts().empty == 0
    }

    /// Check if the game ended in a draw
    pub fn is_draw(&self) -> bool {
        self.counts().empty == 0 && self.winner().is_none()
    }

    /// `1` if X has won, `-1` if O has won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards; an unfinished board scores `0`.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Derive the outcome of the board
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.counts().empty == 0 => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Compact single-line form, accepted by [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_string(s)
    }
}

impl TryFrom<String> for Board {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Board::from_string(&s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.encode()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(
                f,
                " {} | {} | {}",
                row[0].to_char(),
                row[1].to_char(),
                row[2].to_char()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.turn(), Player::X);
        assert_eq!(board.counts().empty, 9);
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply_move(mv(1, 1)).unwrap();
        assert_eq!(next.get(mv(1, 1)), Cell::X);
        assert_eq!(next.turn(), Player::O);
        assert_eq!(board, Board::new());

        let err = next.apply_move(mv(1, 1)).unwrap_err();
        assert_eq!(err, Error::IllegalMove { row: 1, col: 1 });
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let err = Board::new().apply_move(Move { row: 3, col: 0 }).unwrap_err();
        assert_eq!(err, Error::OutOfBounds { row: 3, col: 0 });
        assert!(Move::new(0, 3).is_err());
        assert!(Move::from_index(9).is_err());
    }

    #[test]
    fn test_move_index_round_trip() {
        for index in 0..9 {
            assert_eq!(Move::from_index(index).unwrap().index(), index);
        }
        assert_eq!(mv(2, 1).index(), 7);
        assert_eq!(mv(2, 1).to_string(), "(2, 1)");
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], mv(0, 1));
        assert_eq!(moves[6], mv(2, 2));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_turn_alternates() {
        let board = Board::new().apply_move(mv(0, 0)).unwrap();
        assert_eq!(board.turn(), Player::O);
        let board = board.apply_move(mv(0, 1)).unwrap();
        assert_eq!(board.turn(), Player::X);
        assert_eq!(board.get(mv(0, 1)), Cell::O);
    }

    #[test]
    fn test_full_board_draw() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert!(!board.is_draw());
        assert_eq!(board.utility(), 1);
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_column_win_for_o() {
        let board = Board::from_string("XO./XO./.OX").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_diagonal_win() {
        let board = Board::from_string("XO./.X./O.X").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XO?......"),
            Err(Error::InvalidCellCharacter {
                character: '?',
                position: 2,
                ..
            })
        ));
        assert_eq!(
            Board::from_string("XX......."),
            Err(Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            })
        );
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_encode_parses_back() {
        let board = Board::from_string("x0. .x. ...").unwrap();
        assert_eq!(board.encode(), "XO./.X./...");
        assert_eq!(board.encode().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_serde_uses_compact_form() {
        let board = Board::from_string("XO./.X./...").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#""XO./.X./...""#);
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_impossible_counts() {
        let err = serde_json::from_str::<Board>(r#""XX./X../...""#).unwrap_err();
        assert!(err.to_string().contains("invalid piece counts"));
        assert!(serde_json::from_str::<Board>(r#""XO""#).is_err());
    }

    #[test]
    fn test_deserialize_move_checks_bounds() {
        let ok: Move = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(ok, mv(2, 1));

        let err = serde_json::from_str::<Move>(r#"{"row":7,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XO./.X./...").unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.starts_with(" X | O | ."));
    }
}
