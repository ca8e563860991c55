//! Best-move command - Print the optimal move for a position

use anyhow::Result;
use clap::Parser;

use super::parse_board;
use crate::cli::config::SearchArgs;

#[derive(Parser, Debug)]
#[command(about = "Print the optimal move for the player to move")]
pub struct BestMoveArgs {
    /// Board in row-major order, e.g. "XO./.X./..."
    pub board: String,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let mut searcher = args.search.searcher();

    match searcher.best_move(&board) {
        Some(mv) => println!("{mv}"),
        None => println!("none"),
    }
    Ok(())
}
