//! Self-play command - Play optimal moves for both sides

use anyhow::Result;
use clap::Parser;

use super::parse_board;
use crate::{
    cli::{config::SearchArgs, output},
    tictactoe::{Board, Game},
};

#[derive(Parser, Debug)]
#[command(about = "Play the solver against itself")]
pub struct SelfPlayArgs {
    /// Start from this board instead of the empty one
    #[arg(long)]
    pub from: Option<String>,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let start = match &args.from {
        Some(text) => parse_board(text)?,
        None => Board::new(),
    };
    let mut searcher = args.search.searcher();
    let mut game = Game::from_board(start);
    let outcome = game.self_play(&mut searcher)?;

    output::print_section("Start");
    print!("{start}");
    let states = game.states()?;
    for (played, board) in game.moves().iter().zip(states.iter().skip(1)) {
        output::print_section(&format!("{} plays {}", played.player, played.mv));
        print!("{board}");
    }

    output::print_section("Result");
    output::print_kv("Outcome", &outcome.to_string());
    output::print_kv("Plies", &game.moves().len().to_string());
    output::print_stats(&searcher.stats());
    Ok(())
}
