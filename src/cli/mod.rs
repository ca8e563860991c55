//! Command-line front end for the solver
//!
//! Each subcommand is a thin consumer of the library API: it parses a board,
//! runs the search, and prints the result.

pub mod commands;
pub mod config;
pub mod output;
