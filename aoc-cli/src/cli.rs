//! CLI argument parsing using clap

use clap::{ArgAction, Parser};

/// Run a daily puzzle solver on input read from stdin
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Solve a daily puzzle read from stdin", version)]
pub struct Args {
    /// Puzzle year
    #[arg(short, long, default_value_t = 2025)]
    pub year: u16,

    /// Puzzle day (required unless --list)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// List registered solvers instead of solving
    #[arg(short, long)]
    pub list: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
