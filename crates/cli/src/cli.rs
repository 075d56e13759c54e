//! Command-line interface for the linkage engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// More/Less domino engine: automated matches and move-tree counts.
#[derive(Parser, Debug)]
#[command(name = "linkage")]
#[command(about = "Rule engine and automated opponent for the More/Less domino game", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play computer-vs-computer matches and print the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Seed for reproducible games. Without it each run differs.
        #[arg(short, long)]
        seed: Option<u64>,

        /// TOML file with rank weights. Missing keys keep their defaults.
        #[arg(short, long, conflicts_with = "preset")]
        weights: Option<PathBuf>,

        /// Built-in weight preset
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Print only the final tally
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count the leaves of the legal-move tree from the opening position
    Perft {
        /// Depth in plies
        #[arg(short, long)]
        depth: u32,

        /// Split root moves across threads
        #[arg(long, conflicts_with = "cached")]
        parallel: bool,

        /// Reuse subtree counts for repeated positions
        #[arg(long)]
        cached: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Preset {
    Default,
    Aggressive,
    Cautious,
}
