//! Formation availability pre-flight.
//!
//! A cheap, per-slot-group supply check run before the optimizer. It counts
//! players group by group and ignores that one player cannot fill two groups,
//! so a passing report is necessary but not sufficient for a lineup to exist.

use serde::Serialize;
use tracing::debug;

use crate::domain::{EligibilityMap, Formation, Player, SubPosition};

/// Supply versus demand for one slot-group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub position: SubPosition,
    pub required: usize,
    /// Players whose own sub-position is this slot.
    pub exact: usize,
    /// Players counted towards the slot (exact, or every eligible player).
    pub available: usize,
    pub sufficient: bool,
}

impl SlotAvailability {
    /// How many players the group is short by.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.required.saturating_sub(self.available)
    }
}

/// Per-group availability for one formation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub formation: String,
    pub groups: Vec<SlotAvailability>,
}

impl AvailabilityReport {
    /// True when every slot-group has enough supply.
    #[must_use]
    pub fn sufficient(&self) -> bool {
        self.groups.iter().all(|g| g.sufficient)
    }

    /// Groups that fall short, in formation order.
    pub fn deficits(&self) -> impl Iterator<Item = &SlotAvailability> {
        self.groups.iter().filter(|g| !g.sufficient)
    }

    #[must_use]
    pub fn get(&self, position: SubPosition) -> Option<&SlotAvailability> {
        self.groups.iter().find(|g| g.position == position)
    }
}

/// Count supply per slot-group of `formation` within `pool`.
///
/// Flexible supply is only consulted when exact supply falls short and
/// flexible positions are enabled.
#[must_use]
pub fn check_formation_availability(
    pool: &[Player],
    formation: &Formation,
    eligibility: &EligibilityMap,
    allow_flexible: bool,
) -> AvailabilityReport {
    let groups = formation
        .groups()
        .map(|(position, required)| {
            let exact = pool.iter().filter(|p| p.sub_position == position).count();
            let available = if exact >= required || !allow_flexible {
                exact
            } else {
                pool.iter()
                    .filter(|p| eligibility.is_eligible(p.sub_position, position, true))
                    .count()
            };
            SlotAvailability {
                position,
                required,
                exact,
                available,
                sufficient: available >= required,
            }
        })
        .collect();

    let report = AvailabilityReport {
        formation: formation.name.clone(),
        groups,
    };
    debug!(
        formation = %report.formation,
        pool = pool.len(),
        allow_flexible,
        sufficient = report.sufficient(),
        "formation availability checked"
    );
    report
}
