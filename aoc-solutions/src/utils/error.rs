//! Failures of the shared algorithms

use aoc_solver::SolveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// Input the algorithm cannot work with, e.g. too few digits to select from
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A polygon edge that is neither horizontal nor vertical
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),
    #[error("asked for the {requested} largest components but only {available} exist")]
    NotEnoughComponents { requested: usize, available: usize },
    /// The graph was assumed acyclic but is not
    #[error("graph has a cycle: only {ordered} of {total} nodes could be ordered")]
    Cycle { ordered: usize, total: usize },
    #[error("target state {target:#b} is unreachable")]
    Unreachable { target: u16 },
    #[error("integer program is infeasible: {0}")]
    Infeasible(String),
    /// An intermediate or final value does not fit its integer type
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
    /// The instance is well formed but has no answer
    #[error("no solution: {0}")]
    NoSolution(String),
}

impl From<AlgoError> for SolveError {
    fn from(error: AlgoError) -> Self {
        SolveError::failed(error)
    }
}
