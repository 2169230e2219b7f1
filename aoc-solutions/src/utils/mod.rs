//! Building blocks shared by the day solvers

pub mod bitmask_bfs;
pub mod compressed_grid;
mod error;
pub mod graph;
pub mod ilp;
pub mod interval;
pub mod parse;
pub mod top_digits;
pub mod union_find;

pub use error::AlgoError;
