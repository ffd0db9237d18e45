//! Position suitability scoring.
//!
//! Converts a player's sparse raw statistics into a 0-100 fitness score for a
//! target sub-position. Each sub-position has a fixed weight vector over a
//! subset of statistic names (non-negative, summing to one). Weighted stats
//! are rescaled onto [0, 1] before being combined:
//!
//! - [`Normalization::Reference`] divides by a fixed per-stat reference scale,
//!   so scores are comparable across calls and datasets.
//! - [`Normalization::MinMax`] rescales each stat across the players of one
//!   batch, so scores are only comparable within that batch.
//!
//! Missing statistics contribute zero. Stats without a weight for the target
//! position are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Player, SubPosition};

/// Tolerance used when checking that a weight vector sums to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Stat name → weight for one position.
pub type StatWeights = BTreeMap<String, f64>;

/// How weighted stats are mapped onto [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// `clamp(value / scale, 0, 1)` with a fixed scale per stat.
    #[default]
    Reference,
    /// Min-max across the batch being scored.
    MinMax,
}

/// Stateless scorer over immutable weight and scale tables.
#[derive(Debug, Clone, PartialEq)]
pub struct SuitabilityScorer {
    weights: BTreeMap<SubPosition, StatWeights>,
    scales: BTreeMap<String, f64>,
    normalization: Normalization,
}

impl Default for SuitabilityScorer {
    fn default() -> Self {
        Self {
            weights: default_positional_weights(),
            scales: default_stat_scales(),
            normalization: Normalization::Reference,
        }
    }
}

impl SuitabilityScorer {
    /// Build a scorer from the defaults plus per-position and per-stat overrides.
    ///
    /// An override for a position replaces that position's whole vector.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeights`] when a vector has a negative
    /// weight, does not sum to one, or (in reference mode) weights a stat
    /// without a positive scale.
    pub fn with_overrides(
        weight_overrides: &BTreeMap<SubPosition, StatWeights>,
        scale_overrides: &BTreeMap<String, f64>,
        normalization: Normalization,
    ) -> Result<Self, DomainError> {
        let mut scorer = Self::default();
        for (position, weights) in weight_overrides {
            scorer.weights.insert(*position, weights.clone());
        }
        for (stat, scale) in scale_overrides {
            scorer.scales.insert(stat.clone(), *scale);
        }
        scorer.normalization = normalization;
        scorer.validate()?;
        Ok(scorer)
    }

    /// Check every weight vector and the scales it depends on.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeights`] naming the offending position.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (position, weights) in &self.weights {
            let invalid = |reason: String| DomainError::InvalidWeights {
                owner: position.to_string(),
                reason,
            };

            if let Some((stat, w)) = weights.iter().find(|(_, w)| **w < 0.0 || !w.is_finite()) {
                return Err(invalid(format!("weight for {stat} is {w}")));
            }
            let sum: f64 = weights.values().sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(invalid(format!("weights sum to {sum}, expected 1")));
            }
            if self.normalization == Normalization::Reference {
                for stat in weights.keys() {
                    match self.scales.get(stat) {
                        Some(scale) if *scale > 0.0 => {}
                        _ => return Err(invalid(format!("no positive reference scale for {stat}"))),
                    }
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Weight vector for a position (empty when none is declared).
    #[must_use]
    pub fn weights_for(&self, position: SubPosition) -> StatWeights {
        self.weights.get(&position).cloned().unwrap_or_default()
    }

    /// Score one player for one position, as a batch of one.
    #[must_use]
    pub fn calculate_position_score(&self, player: &Player, position: SubPosition) -> f64 {
        self.score_batch(&[player], position)
            .first()
            .copied()
            .unwrap_or(0.0)
    }

    /// Score a batch of players for one position.
    ///
    /// The result is index-aligned with `players`. Each score depends only on
    /// the player and (for min-max) the multiset of stats in the batch, never
    /// on batch order.
    #[must_use]
    pub fn score_batch(&self, players: &[&Player], position: SubPosition) -> Vec<f64> {
        let Some(weights) = self.weights.get(&position) else {
            return vec![0.0; players.len()];
        };

        let rescalers: Vec<(&str, f64, Rescale)> = weights
            .iter()
            .map(|(stat, weight)| (stat.as_str(), *weight, self.rescale_for(stat, players)))
            .collect();

        players
            .iter()
            .map(|player| {
                let raw: f64 = rescalers
                    .iter()
                    .map(|(stat, weight, rescale)| {
                        player
                            .stat(stat)
                            .map_or(0.0, |value| weight * rescale.apply(value))
                    })
                    .sum();
                (raw * 100.0).clamp(0.0, 100.0)
            })
            .collect()
    }

    fn rescale_for(&self, stat: &str, players: &[&Player]) -> Rescale {
        match self.normalization {
            Normalization::Reference => {
                Rescale::Scale(self.scales.get(stat).copied().unwrap_or(0.0))
            }
            Normalization::MinMax => {
                let mut present = players.iter().filter_map(|p| p.stat(stat));
                match present.next() {
                    None => Rescale::Scale(0.0),
                    Some(first) => {
                        let (min, max) =
                            present.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
                        Rescale::Range { min, max }
                    }
                }
            }
        }
    }
}

/// Per-stat mapping onto [0, 1].
#[derive(Debug, Clone, Copy)]
enum Rescale {
    Scale(f64),
    Range { min: f64, max: f64 },
}

impl Rescale {
    fn apply(self, value: f64) -> f64 {
        let unit = match self {
            Rescale::Scale(scale) if scale > 0.0 => value / scale,
            Rescale::Scale(_) => 0.0,
            Rescale::Range { min, max } if max > min => (value - min) / (max - min),
            Rescale::Range { .. } => {
                if value > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        };
        if unit.is_finite() {
            unit.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

fn weights(entries: &[(&str, f64)]) -> StatWeights {
    entries.iter().map(|(s, w)| ((*s).to_string(), *w)).collect()
}

/// Built-in weight vectors per sub-position.
#[must_use]
pub fn default_positional_weights() -> BTreeMap<SubPosition, StatWeights> {
    use SubPosition::*;

    let fullback = weights(&[
        ("tackles", 0.25),
        ("interceptions", 0.15),
        ("crosses", 0.2),
        ("progressive_passes", 0.15),
        ("pass_completion", 0.1),
        ("xa", 0.15),
    ]);
    let wide_midfielder = weights(&[
        ("crosses", 0.25),
        ("xa", 0.25),
        ("dribbles", 0.2),
        ("key_passes", 0.15),
        ("tackles", 0.15),
    ]);
    let winger = weights(&[
        ("dribbles", 0.25),
        ("xg", 0.25),
        ("xa", 0.25),
        ("key_passes", 0.15),
        ("crosses", 0.1),
    ]);

    [
        (
            GK,
            weights(&[
                ("save_pct", 0.35),
                ("saves", 0.25),
                ("clean_sheets", 0.25),
                ("pass_completion", 0.15),
            ]),
        ),
        (
            CB,
            weights(&[
                ("tackles", 0.2),
                ("interceptions", 0.2),
                ("clearances", 0.25),
                ("aerials_won", 0.2),
                ("pass_completion", 0.15),
            ]),
        ),
        (RB, fullback.clone()),
        (LB, fullback),
        (
            DM,
            weights(&[
                ("tackles", 0.25),
                ("interceptions", 0.25),
                ("pass_completion", 0.25),
                ("progressive_passes", 0.25),
            ]),
        ),
        (
            CM,
            weights(&[
                ("pass_completion", 0.25),
                ("progressive_passes", 0.25),
                ("key_passes", 0.2),
                ("tackles", 0.15),
                ("xa", 0.15),
            ]),
        ),
        (
            CAM,
            weights(&[("key_passes", 0.3), ("xa", 0.3), ("xg", 0.2), ("dribbles", 0.2)]),
        ),
        (LM, wide_midfielder.clone()),
        (RM, wide_midfielder),
        (LW, winger.clone()),
        (RW, winger),
        (
            ST,
            weights(&[("xg", 0.5), ("shots", 0.2), ("xa", 0.15), ("aerials_won", 0.15)]),
        ),
    ]
    .into_iter()
    .collect()
}

/// Built-in per-90 reference scales (value mapped to 1.0).
#[must_use]
pub fn default_stat_scales() -> BTreeMap<String, f64> {
    [
        ("xg", 1.0),
        ("xa", 0.6),
        ("shots", 5.0),
        ("key_passes", 4.0),
        ("dribbles", 5.0),
        ("crosses", 6.0),
        ("progressive_passes", 12.0),
        ("pass_completion", 100.0),
        ("tackles", 5.0),
        ("interceptions", 3.5),
        ("clearances", 8.0),
        ("aerials_won", 6.0),
        ("saves", 5.0),
        ("save_pct", 100.0),
        ("clean_sheets", 1.0),
    ]
    .into_iter()
    .map(|(s, v)| (s.to_string(), v))
    .collect()
}
