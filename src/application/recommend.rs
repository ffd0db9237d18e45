//! Ranked player recommendations for one position.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::suitability::SuitabilityScorer;
use crate::domain::{EligibilityMap, Player, SubPosition};

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 10;

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub player: Player,
    pub score: f64,
    /// Raw values of the stats weighted for the position (present ones only).
    pub stats: BTreeMap<String, f64>,
}

/// Rank every player who may fill `position` by suitability.
///
/// Candidates are scored as one batch, sorted by score descending and then
/// by id ascending, and cut to `limit`.
#[must_use]
pub fn recommend(
    players: &[Player],
    position: SubPosition,
    eligibility: &EligibilityMap,
    scorer: &SuitabilityScorer,
    limit: usize,
) -> Vec<Recommendation> {
    let eligible = eligibility.eligible_for(position);
    let candidates: Vec<&Player> = players
        .iter()
        .filter(|p| eligible.contains(&p.sub_position))
        .collect();
    let scores = scorer.score_batch(&candidates, position);
    let weighted = scorer.weights_for(position);

    let mut ranked: Vec<Recommendation> = candidates
        .into_iter()
        .zip(scores)
        .map(|(player, score)| Recommendation {
            stats: weighted
                .keys()
                .filter_map(|stat| player.stat(stat).map(|v| (stat.clone(), v)))
                .collect(),
            player: player.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player.id.cmp(&b.player.id))
    });
    ranked.truncate(limit);
    ranked
}
