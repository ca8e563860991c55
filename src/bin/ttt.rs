//! ttt - Exact tic-tac-toe solver
//!
//! This CLI provides:
//! - Position analysis (turn, legal moves, winner, game value)
//! - The optimal move for a position
//! - Optimal self-play from any position

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Exact tic-tac-toe solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position
    Analyze(ttt_solver::cli::commands::analyze::AnalyzeArgs),

    /// Print the optimal move for a position
    BestMove(ttt_solver::cli::commands::best_move::BestMoveArgs),

    /// Play optimal moves for both sides until the game ends
    SelfPlay(ttt_solver::cli::commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => ttt_solver::cli::commands::analyze::execute(args),
        Commands::BestMove(args) => ttt_solver::cli::commands::best_move::execute(args),
        Commands::SelfPlay(args) => ttt_solver::cli::commands::self_play::execute(args),
    }
}
