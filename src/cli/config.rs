//! Shared configuration flags for CLI commands

use clap::Args;

use crate::search::{SearchConfig, Searcher};

/// Search flags shared by every command that runs the solver
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SearchArgs {
    /// Walk the whole game tree instead of pruning
    #[arg(long)]
    pub no_pruning: bool,
}

impl SearchArgs {
    pub fn to_config(self) -> SearchConfig {
        SearchConfig::new().with_pruning(!self.no_pruning)
    }

    pub fn searcher(self) -> Searcher {
        Searcher::new(self.to_config())
    }
}
