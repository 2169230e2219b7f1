//! Core solver traits

use crate::error::{ParseError, SolveError};
use std::fmt;

/// A labelled figure derived from parsed input, such as `junction boxes: 20`.
///
/// Runners print these before the answers so a reader can sanity-check that the
/// whole input was consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStat {
    pub label: &'static str,
    pub value: String,
}

impl InputStat {
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for InputStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Parses puzzle input into the data every part works on.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results parts want to share.
    ///
    /// Owned data is the common case; borrowing from the input (`&'a str`)
    /// works when no transformation is needed.
    type SharedData<'a>;

    /// Parse the raw input. Malformed input must be rejected here, not later.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;

    /// Derived counts worth reporting alongside the answers.
    fn input_stats(_shared: &Self::SharedData<'_>) -> Vec<InputStat> {
        Vec::new()
    }
}

/// Solves part `N` of a puzzle.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let rises = shared.windows(2).filter(|w| w[1] > w[0]).count();
///         Ok(rises.to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Part dispatch for one year-day puzzle.
///
/// Usually derived with `#[derive(AocSolver)]`, which routes `solve_part(p)` to
/// `<Self as PartSolver<p>>::solve`.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part`, returning [`SolveError::PartNotImplemented`] for unknown parts.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS` first.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
