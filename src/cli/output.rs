//! Output formatting for CLI

use crate::{
    search::SearchStats,
    tictactoe::{Move, Player},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Format a list of moves as `(r, c) (r, c) ...`, or `none`
pub fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describe a game value in words
pub fn describe_value(value: i8) -> &'static str {
    match value {
        v if v > 0 => "X wins with best play",
        v if v < 0 => "O wins with best play",
        _ => "draw with best play",
    }
}

pub fn format_winner(winner: Option<Player>) -> String {
    winner.map_or_else(|| "none".to_string(), |p| p.to_string())
}

/// Print search statistics
pub fn print_stats(stats: &SearchStats) {
    print_kv("Nodes", &format_number(stats.nodes));
    print_kv("Prunes", &format_number(stats.prunes));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}
