//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod best_move;
pub mod self_play;

use anyhow::{Context, Result};

use crate::tictactoe::Board;

/// Parse a board argument such as `"XO./.X./..O"`.
pub(crate) fn parse_board(text: &str) -> Result<Board> {
    Board::from_string(text).with_context(|| format!("failed to parse board '{text}'"))
}
