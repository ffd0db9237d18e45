//! Position-eligibility map.
//!
//! Maps a formation slot's required sub-position to the player
//! sub-positions allowed to fill it. A sub-position is always eligible for its
//! own slot; everything else is an explicit allow-list.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::position::SubPosition;

/// Immutable slot → flexible sub-positions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EligibilityMap {
    flexible: BTreeMap<SubPosition, BTreeSet<SubPosition>>,
}

impl EligibilityMap {
    /// Build a map from `(slot, [player sub-positions])` entries.
    ///
    /// Identity entries are dropped since identity always holds.
    pub fn from_entries<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SubPosition, P)>,
        P: IntoIterator<Item = SubPosition>,
    {
        let mut flexible: BTreeMap<SubPosition, BTreeSet<SubPosition>> = BTreeMap::new();
        for (slot, positions) in entries {
            let allowed = flexible.entry(slot).or_default();
            allowed.extend(positions.into_iter().filter(|p| *p != slot));
        }
        flexible.retain(|_, allowed| !allowed.is_empty());
        Self { flexible }
    }

    /// Whether a player with `player` sub-position may fill a `slot`.
    #[must_use]
    pub fn is_eligible(&self, player: SubPosition, slot: SubPosition, allow_flexible: bool) -> bool {
        player == slot || (allow_flexible && self.is_flexible(player, slot))
    }

    /// Whether `(player, slot)` is listed as a flexible (non-identity) pair.
    #[must_use]
    pub fn is_flexible(&self, player: SubPosition, slot: SubPosition) -> bool {
        self.flexible
            .get(&slot)
            .is_some_and(|allowed| allowed.contains(&player))
    }

    /// Every player sub-position that may fill `slot`, identity first.
    #[must_use]
    pub fn eligible_for(&self, slot: SubPosition) -> Vec<SubPosition> {
        let mut positions = vec![slot];
        if let Some(allowed) = self.flexible.get(&slot) {
            positions.extend(allowed.iter().copied());
        }
        positions
    }

    /// Flexible entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (SubPosition, &BTreeSet<SubPosition>)> {
        self.flexible.iter().map(|(slot, allowed)| (*slot, allowed))
    }
}

impl Default for EligibilityMap {
    /// The standard allow-list. Centre-backs never cover the flanks.
    fn default() -> Self {
        use SubPosition::*;

        Self::from_entries([
            (CB, vec![DM]),
            (RB, vec![RM]),
            (LB, vec![LM]),
            (DM, vec![CM, CB]),
            (CM, vec![DM, CAM]),
            (CAM, vec![CM]),
            (LM, vec![LW, LB]),
            (RM, vec![RW, RB]),
            (LW, vec![LM]),
            (RW, vec![RM]),
            (ST, vec![LW, RW]),
        ])
    }
}
