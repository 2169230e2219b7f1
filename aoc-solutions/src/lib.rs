//! Puzzle solutions with automatic registration
//!
//! [`utils`] holds the parsing helpers and the classic algorithms the days are
//! built from. Each solution under `my_solutions` derives `AutoRegisterSolver`,
//! so linking this crate is enough for `SolverRegistryBuilder::register_all_plugins`
//! to find it.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
