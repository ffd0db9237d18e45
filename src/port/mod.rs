//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points the application layer is written
//! against; adapters implement them.
//!
//! # Available Ports
//!
//! - [`Solver`] - LP/ILP optimization backend

mod solver;

pub use solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};
