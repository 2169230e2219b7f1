//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid flag combination
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry lookup, parse or solve failure
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No puzzle input on stdin")]
    EmptyInput,

    /// No registered solver survives the year and tag filters
    #[error("No solver registered for {year}/{day:02} matching tags [{tags}]")]
    NoMatchingSolver { year: u16, day: u8, tags: String },

    /// Some parts failed after their errors were reported
    #[error("{failed} of {total} part(s) failed")]
    PartsFailed { failed: usize, total: usize },
}
