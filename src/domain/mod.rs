//! Lineup domain: players, positions, formations and results.

pub mod constraint;
pub mod eligibility;
pub mod error;
pub mod formation;
pub mod id;
pub mod lineup;
pub mod player;
pub mod position;
pub mod strategy;

pub use constraint::{Constraint, ConstraintSense, VariableBounds};
pub use eligibility::EligibilityMap;
pub use error::DomainError;
pub use formation::{Formation, FormationRegistry, LINEUP_SIZE};
pub use id::PlayerId;
pub use lineup::{GroupStats, LineupSolution, LineupStatus, SlotAssignment};
pub use player::{Player, RawStats};
pub use position::{PositionGroup, SubPosition};
pub use strategy::{Strategy, StrategyWeights, WeightPair};
