//! Tactical formations and the formation registry.
//!
//! A formation is a multiset of required sub-position slots summing to
//! exactly eleven. Slots requiring the same sub-position form a *slot-group*.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::position::SubPosition;

/// Number of players in a starting lineup.
pub const LINEUP_SIZE: usize = 11;

/// A named tactical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Required count per sub-position, iterated in pitch order.
    pub slots: BTreeMap<SubPosition, usize>,
}

impl Formation {
    /// Create a validated formation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedFormation`] when a slot-group repeats,
    /// a count is zero, or the total is not eleven.
    pub fn try_new(
        name: impl Into<String>,
        description: impl Into<String>,
        groups: Vec<(SubPosition, usize)>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let mut slots = BTreeMap::new();
        for (position, count) in groups {
            if slots.insert(position, count).is_some() {
                return Err(DomainError::MalformedFormation {
                    name,
                    reason: format!("slot-group {position} listed twice"),
                });
            }
        }
        let formation = Self {
            name,
            description: description.into(),
            slots,
        };
        formation.validate()?;
        Ok(formation)
    }

    /// Check the eleven-slot invariant.
    ///
    /// Formations that come from configuration bypass [`Formation::try_new`],
    /// so the optimizer calls this again before solving.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedFormation`] on a zero count or a total
    /// other than eleven.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some((position, _)) = self.slots.iter().find(|(_, count)| **count == 0) {
            return Err(DomainError::MalformedFormation {
                name: self.name.clone(),
                reason: format!("slot-group {position} has a zero count"),
            });
        }
        let total = self.total_slots();
        if total != LINEUP_SIZE {
            return Err(DomainError::MalformedFormation {
                name: self.name.clone(),
                reason: format!("slots sum to {total}, expected {LINEUP_SIZE}"),
            });
        }
        Ok(())
    }

    /// Total number of slots.
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.slots.values().sum()
    }

    /// Slot-groups in pitch order.
    pub fn groups(&self) -> impl Iterator<Item = (SubPosition, usize)> + '_ {
        self.slots.iter().map(|(position, count)| (*position, *count))
    }

    /// Required count for one sub-position (zero when absent).
    #[must_use]
    pub fn required(&self, position: SubPosition) -> usize {
        self.slots.get(&position).copied().unwrap_or(0)
    }

    /// Compact slot listing, e.g. `GK:1 CB:2 RB:1 ...`.
    #[must_use]
    pub fn slot_summary(&self) -> String {
        self.groups()
            .map(|(position, count)| format!("{position}:{count}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read-only set of formations keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationRegistry {
    formations: BTreeMap<String, Formation>,
}

impl FormationRegistry {
    /// Build a registry from already-constructed formations.
    ///
    /// # Errors
    ///
    /// Returns the first formation that fails validation.
    pub fn from_formations(
        formations: impl IntoIterator<Item = Formation>,
    ) -> Result<Self, DomainError> {
        let mut map = BTreeMap::new();
        for formation in formations {
            formation.validate()?;
            map.insert(formation.name.clone(), formation);
        }
        Ok(Self { formations: map })
    }

    /// Look up a formation by name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownFormation`] when the name is not registered.
    pub fn get(&self, name: &str) -> Result<&Formation, DomainError> {
        self.formations
            .get(name.trim())
            .ok_or_else(|| DomainError::UnknownFormation(name.to_string()))
    }

    /// Registered formation names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formations.keys().map(String::as_str)
    }

    /// Registered formations, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Formation> {
        self.formations.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }
}

impl Default for FormationRegistry {
    fn default() -> Self {
        use SubPosition::*;

        let table: [(&str, &str, Vec<(SubPosition, usize)>); 7] = [
            (
                "4-3-3",
                "Classic attacking shape: a creative 10 behind a front three with wide forwards.",
                vec![(GK, 1), (CB, 2), (RB, 1), (LB, 1), (CM, 2), (CAM, 1), (RW, 1), (LW, 1), (ST, 1)],
            ),
            (
                "4-4-2",
                "Balanced flat midfield four with two strikers.",
                vec![(GK, 1), (CB, 2), (RB, 1), (LB, 1), (CM, 2), (RM, 1), (LM, 1), (ST, 2)],
            ),
            (
                "4-2-3-1",
                "Double pivot screening the back four, three creators behind a lone striker.",
                vec![(GK, 1), (CB, 2), (RB, 1), (LB, 1), (DM, 2), (CAM, 1), (RW, 1), (LW, 1), (ST, 1)],
            ),
            (
                "4-1-4-1",
                "Single holding midfielder with a compact band of four in front.",
                vec![(GK, 1), (CB, 2), (RB, 1), (LB, 1), (DM, 1), (CM, 2), (RM, 1), (LM, 1), (ST, 1)],
            ),
            (
                "3-5-2",
                "Three centre-backs, wide midfielders providing width, two strikers.",
                vec![(GK, 1), (CB, 3), (DM, 1), (CM, 2), (RM, 1), (LM, 1), (ST, 2)],
            ),
            (
                "3-4-3",
                "Aggressive back three with wingers and a central striker.",
                vec![(GK, 1), (CB, 3), (CM, 2), (RM, 1), (LM, 1), (RW, 1), (LW, 1), (ST, 1)],
            ),
            (
                "5-3-2",
                "Deep back five built for defensive solidity and counter-attacks.",
                vec![(GK, 1), (CB, 3), (RB, 1), (LB, 1), (DM, 1), (CM, 2), (ST, 2)],
            ),
        ];

        let formations = table
            .into_iter()
            .map(|(name, description, groups)| {
                let slots = groups.into_iter().collect();
                (
                    name.to_string(),
                    Formation {
                        name: name.to_string(),
                        description: description.to_string(),
                        slots,
                    },
                )
            })
            .collect();

        Self { formations }
    }
}
