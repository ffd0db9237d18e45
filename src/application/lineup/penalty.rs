//! Off-position penalty applied to flexible assignments.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Tunable reduction of a player's selection weight when they fill a slot
/// other than their own sub-position.
///
/// The coefficient for a flexible pair is
/// `weight * (1 - flat - suitability * gap / 100)`, floored at zero, where
/// `gap` is how many suitability points the player loses at the slot compared
/// with their native position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffPositionPenalty {
    /// Fraction removed for any off-position assignment.
    pub flat: f64,
    /// Fraction removed per 100 points of suitability gap.
    pub suitability: f64,
}

impl Default for OffPositionPenalty {
    fn default() -> Self {
        Self {
            flat: 0.05,
            suitability: 0.25,
        }
    }
}

impl OffPositionPenalty {
    /// No penalty: flexible pairs earn the full selection weight.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            flat: 0.0,
            suitability: 0.0,
        }
    }

    /// Objective coefficient for a flexible pair.
    ///
    /// `native_score` and `slot_score` are suitability scores in [0, 100].
    #[must_use]
    pub fn coefficient(&self, selection_weight: f64, native_score: f64, slot_score: f64) -> f64 {
        let gap = (native_score - slot_score).max(0.0);
        let factor = (1.0 - self.flat - self.suitability * gap / 100.0).max(0.0);
        selection_weight * factor
    }

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeights`] when either fraction falls
    /// outside [0, 1].
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [("flat", self.flat), ("suitability", self.suitability)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::InvalidWeights {
                    owner: "off_position".to_string(),
                    reason: format!("{name} is {value}, expected a value in [0, 1]"),
                });
            }
        }
        Ok(())
    }
}
