//! Puzzle Solver Framework
//!
//! Every daily puzzle is a unit type that knows how to parse its input
//! ([`AocParser`]) and how to solve each part ([`PartSolver`]). The
//! `#[derive(AocSolver)]` macro glues the parts into a [`Solver`], and
//! `#[derive(AutoRegisterSolver)]` submits it to a process-wide plugin list that
//! [`SolverRegistryBuilder::register_all_plugins`] turns into a [`SolverRegistry`].
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Masses;
//!
//! impl AocParser for Masses {
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Masses {
//!     fn solve(shared: &mut Vec<u64>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Masses {
//!     fn solve(shared: &mut Vec<u64>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Masses>(2019, 1, &["fuel"])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2019, 1, "12\n14").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "26");
//! assert_eq!(solver.solve(2).unwrap().answer, "14");
//! ```
//!
//! Parts share one `SharedData` value per parsed input, so part 2 may reuse work
//! stored there by part 1, but must still work when run on its own.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, InputStat, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
