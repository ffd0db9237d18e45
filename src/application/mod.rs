//! Application services (use cases).
//!
//! These services combine the domain tables with a solver backend to answer
//! lineup, availability and recommendation requests.

pub mod availability;
pub mod lineup;
pub mod recommend;
pub mod squad;
pub mod suitability;

pub use availability::{check_formation_availability, AvailabilityReport, SlotAvailability};
pub use lineup::{LineupOptimizer, OffPositionPenalty};
pub use recommend::{recommend, Recommendation};
pub use squad::{list_squad, BudgetRange, Fitness, SquadEntry, SquadFilter, SquadSort, SquadSummary};
pub use suitability::{Normalization, SuitabilityScorer};
