//! Squad overview and player listing for one team.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Player, PlayerId, SubPosition, LINEUP_SIZE};

/// Cheapest and dearest possible spend on eleven players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl BudgetRange {
    /// Range over a set of players; uses every price when fewer than eleven.
    #[must_use]
    pub fn from_players<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut prices: Vec<Decimal> = players.into_iter().map(|p| p.price).collect();
        prices.sort();
        let take = prices.len().min(LINEUP_SIZE);
        Self {
            min: prices.iter().take(take).sum(),
            max: prices.iter().rev().take(take).sum(),
        }
    }

    /// Range over a whole team, injured players included.
    ///
    /// This bounds what a budget for the team can usefully be; it is not
    /// narrowed to the players currently fit to play.
    #[must_use]
    pub fn for_team(players: &[Player], team: &str) -> Self {
        Self::from_players(players.iter().filter(|p| p.team == team))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadSummary {
    pub team: String,
    pub players: usize,
    pub healthy: usize,
    /// Healthy players per sub-position.
    pub positions: BTreeMap<SubPosition, usize>,
    pub total_value: Decimal,
    /// Spend range over the whole squad.
    pub budget_range: BudgetRange,
}

impl SquadSummary {
    #[must_use]
    pub fn from_players(players: &[Player], team: &str) -> Self {
        let squad: Vec<&Player> = players.iter().filter(|p| p.team == team).collect();

        let mut positions = BTreeMap::new();
        let mut healthy = 0;
        for player in squad.iter().filter(|p| p.is_available()) {
            healthy += 1;
            *positions.entry(player.sub_position).or_insert(0) += 1;
        }

        Self {
            team: team.to_string(),
            players: squad.len(),
            healthy,
            positions,
            total_value: squad.iter().map(|p| p.price).sum(),
            budget_range: BudgetRange::from_players(squad.iter().copied()),
        }
    }

    /// Whether enough healthy players exist to attempt a lineup.
    #[must_use]
    pub fn can_field_lineup(&self) -> bool {
        self.healthy >= LINEUP_SIZE
    }
}

/// Which players a listing keeps by injury status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fitness {
    #[default]
    All,
    Healthy,
    Injured,
}

impl Fitness {
    #[must_use]
    pub fn admits(self, player: &Player) -> bool {
        match self {
            Fitness::All => true,
            Fitness::Healthy => player.is_available(),
            Fitness::Injured => player.injured,
        }
    }
}

/// Column a listing is ordered by, highest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SquadSort {
    #[default]
    Rating,
    Price,
    Form,
    Offense,
    Defense,
}

impl SquadSort {
    /// Descending order on the column; ids break ties.
    fn compare(self, a: &Player, b: &Player) -> Ordering {
        let by_column = match self {
            SquadSort::Rating => b.rating.total_cmp(&a.rating),
            SquadSort::Price => b.price.cmp(&a.price),
            SquadSort::Form => b.form.total_cmp(&a.form),
            SquadSort::Offense => b.offense_power.total_cmp(&a.offense_power),
            SquadSort::Defense => b.defense_power.total_cmp(&a.defense_power),
        };
        by_column.then_with(|| a.id.cmp(&b.id))
    }
}

/// Filter and order for a squad listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquadFilter {
    /// Sub-positions to keep; empty keeps every position.
    pub positions: BTreeSet<SubPosition>,
    pub fitness: Fitness,
    pub sort: SquadSort,
}

impl SquadFilter {
    fn admits(&self, player: &Player) -> bool {
        (self.positions.is_empty() || self.positions.contains(&player.sub_position))
            && self.fitness.admits(player)
    }
}

/// One row of a squad listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadEntry {
    pub player: Player,
    /// Whether the player is in the given starting eleven.
    pub in_lineup: bool,
}

/// A team's players filtered and sorted, flagged against `lineup`.
#[must_use]
pub fn list_squad(
    players: &[Player],
    team: &str,
    filter: &SquadFilter,
    lineup: &BTreeSet<PlayerId>,
) -> Vec<SquadEntry> {
    let mut kept: Vec<&Player> = players
        .iter()
        .filter(|p| p.team == team && filter.admits(p))
        .collect();
    kept.sort_by(|a, b| filter.sort.compare(a, b));
    kept.into_iter()
        .map(|player| SquadEntry {
            player: player.clone(),
            in_lineup: lineup.contains(&player.id),
        })
        .collect()
}
