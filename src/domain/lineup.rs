//! Lineup optimization results.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::PlayerId;
use super::player::Player;
use super::position::{PositionGroup, SubPosition};

/// Outcome tag of a lineup optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineupStatus {
    /// A feasible assignment was found and all constraints hold.
    Optimal,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// Reserved for solver faults; cannot occur for a bounded formulation.
    Unbounded,
    /// Solver-internal failure.
    Error,
}

impl fmt::Display for LineupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LineupStatus::Optimal => "Optimal",
            LineupStatus::Infeasible => "Infeasible",
            LineupStatus::Unbounded => "Unbounded",
            LineupStatus::Error => "Error",
        };
        f.write_str(label)
    }
}

/// One player placed in one formation slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAssignment {
    /// Sub-position the slot requires.
    pub slot: SubPosition,
    /// 1-based index of the slot within its slot-group (e.g. CB #2).
    pub slot_index: usize,
    pub player: Player,
    /// Objective coefficient earned by this (player, slot) pair.
    pub score: f64,
}

impl SlotAssignment {
    /// Whether the player fills a slot other than their own sub-position.
    #[must_use]
    pub fn is_off_position(&self) -> bool {
        self.player.sub_position != self.slot
    }

    /// Display label such as `CB2`; single slots have no suffix.
    #[must_use]
    pub fn slot_label(&self, group_size: usize) -> String {
        if group_size > 1 {
            format!("{}{}", self.slot, self.slot_index)
        } else {
            self.slot.to_string()
        }
    }
}

/// Totals for the players of one lineup filling one positional group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub group: PositionGroup,
    pub players: usize,
    pub average_rating: f64,
    pub average_form: f64,
    pub total_price: Decimal,
    pub total_score: f64,
}

/// The engine's answer for one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupSolution {
    pub status: LineupStatus,
    /// Selected players in formation order; empty unless optimal.
    pub assignments: Vec<SlotAssignment>,
    pub total_score: f64,
    pub total_cost: Decimal,
}

impl LineupSolution {
    /// An optimal lineup. Cost is the exact decimal sum of prices.
    #[must_use]
    pub fn optimal(assignments: Vec<SlotAssignment>) -> Self {
        let total_score = assignments.iter().map(|a| a.score).sum();
        let total_cost = assignments.iter().map(|a| a.player.price).sum();
        Self {
            status: LineupStatus::Optimal,
            assignments,
            total_score,
            total_cost,
        }
    }

    /// A non-optimal outcome with an empty selection.
    #[must_use]
    pub fn empty(status: LineupStatus) -> Self {
        Self {
            status,
            assignments: Vec::new(),
            total_score: 0.0,
            total_cost: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn infeasible() -> Self {
        Self::empty(LineupStatus::Infeasible)
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == LineupStatus::Optimal
    }

    /// Selected players in formation order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.assignments.iter().map(|a| &a.player)
    }

    /// Selected player ids, sorted.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.players().map(|p| p.id.clone()).collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn average_rating(&self) -> f64 {
        self.average(|p| p.rating)
    }

    #[must_use]
    pub fn average_form(&self) -> f64 {
        self.average(|p| p.form)
    }

    /// Budget left over after buying the lineup.
    #[must_use]
    pub fn remaining_budget(&self, budget: Decimal) -> Decimal {
        budget - self.total_cost
    }

    /// Per-group totals in pitch order, grouped by the slot each player fills.
    ///
    /// Groups with no assigned player are left out.
    #[must_use]
    pub fn group_stats(&self) -> Vec<GroupStats> {
        let mut groups: BTreeMap<PositionGroup, Vec<&SlotAssignment>> = BTreeMap::new();
        for assignment in &self.assignments {
            groups.entry(assignment.slot.group()).or_default().push(assignment);
        }
        groups
            .into_iter()
            .map(|(group, members)| {
                let count = members.len() as f64;
                GroupStats {
                    group,
                    players: members.len(),
                    average_rating: members.iter().map(|a| a.player.rating).sum::<f64>() / count,
                    average_form: members.iter().map(|a| a.player.form).sum::<f64>() / count,
                    total_price: members.iter().map(|a| a.player.price).sum(),
                    total_score: members.iter().map(|a| a.score).sum(),
                }
            })
            .collect()
    }

    fn average(&self, field: impl Fn(&Player) -> f64) -> f64 {
        if self.assignments.is_empty() {
            return 0.0;
        }
        self.players().map(field).sum::<f64>() / self.assignments.len() as f64
    }
}
