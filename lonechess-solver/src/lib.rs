//! Solitaire chess solver.
//!
//! Searches capture sequences level by level until one piece remains and
//! reports whether the puzzle has no solution, one solution, or several
//! solutions ending on different squares.

pub mod config;
pub mod render;
pub mod solver;
pub mod stats;

pub use solver::{classify, Solution, SolveError, Solver};
pub use stats::SolverStats;
