//! Analyze command - Report everything the solver knows about a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::{config::SearchArgs, output},
    search::{SearchStats, Searcher},
    tictactoe::{Board, LineAnalyzer, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position")]
pub struct AnalyzeArgs {
    /// Board in row-major order, e.g. "XO./.X./..."
    pub board: String,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Facts about a single position
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub board: String,
    pub turn: Player,
    pub legal_moves: Vec<Move>,
    pub immediate_wins: Vec<Move>,
    pub winner: Option<Player>,
    pub terminal: bool,
    pub outcome: Outcome,
    /// Only present on finished boards
    pub utility: Option<i8>,
    pub value: i8,
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

impl Analysis {
    pub fn of(board: &Board, searcher: &mut Searcher) -> Self {
        let terminal = board.is_terminal();
        let turn = board.turn();
        let best = searcher.best_move_with_value(board);
        Analysis {
            board: board.encode(),
            turn,
            legal_moves: board.legal_moves(),
            immediate_wins: if terminal {
                Vec::new()
            } else {
                LineAnalyzer::winning_moves(board.rows(), turn)
            },
            winner: board.winner(),
            terminal,
            outcome: board.outcome(),
            utility: terminal.then(|| board.utility()),
            value: best.map_or_else(|| board.utility(), |(_, value)| value),
            best_move: best.map(|(mv, _)| mv),
            stats: searcher.stats(),
        }
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let mut searcher = args.search.searcher();
    let analysis = Analysis::of(&board, &mut searcher);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    output::print_section("Position");
    print!("{board}");

    output::print_section("Analysis");
    output::print_kv("Turn", &analysis.turn.to_string());
    output::print_kv("Legal moves", &output::format_moves(&analysis.legal_moves));
    output::print_kv("Immediate wins", &output::format_moves(&analysis.immediate_wins));
    output::print_kv("Winner", &output::format_winner(analysis.winner));
    output::print_kv("Terminal", &analysis.terminal.to_string());
    output::print_kv("Outcome", &analysis.outcome.to_string());
    if let Some(utility) = analysis.utility {
        output::print_kv("Utility", &utility.to_string());
    }
    output::print_kv(
        "Value",
        &format!("{} ({})", analysis.value, output::describe_value(analysis.value)),
    );
    output::print_kv(
        "Best move",
        &analysis
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
    );
    output::print_stats(&analysis.stats);

    Ok(())
}
