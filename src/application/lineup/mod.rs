//! Lineup optimization.
//!
//! - [`LineupOptimizer`]: formulates and solves the assignment ILP with a
//!   deterministic tie-break
//! - [`OffPositionPenalty`]: tunable penalty for flexible assignments

mod model;
mod optimizer;
mod penalty;

pub use optimizer::{LineupOptimizer, DEFAULT_TOLERANCE};
pub use penalty::OffPositionPenalty;
