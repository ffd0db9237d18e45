//! Player records consumed by the scorer, the checker and the optimizer.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::PlayerId;
use super::position::SubPosition;

/// Sparse mapping from statistic name to value.
///
/// A `BTreeMap` keeps iteration order stable so that anything derived from
/// the stats is reproducible.
pub type RawStats = BTreeMap<String, f64>;

/// A normalized player record.
///
/// Records arrive already cleaned from the data layer; [`Player::validate`]
/// re-checks the invariants the optimizer depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub sub_position: SubPosition,
    /// Market value in millions.
    pub price: Decimal,
    pub rating: f64,
    pub form: f64,
    pub offense_power: f64,
    pub defense_power: f64,
    #[serde(default)]
    pub injured: bool,
    #[serde(default)]
    pub raw_stats: RawStats,
}

impl Player {
    /// Create a validated, healthy player without raw stats.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyPlayerId`] for a blank id and
    /// [`DomainError::NegativePrice`] for a negative price.
    pub fn try_new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        team: impl Into<String>,
        sub_position: SubPosition,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        let player = Self {
            id: id.into(),
            name: name.into(),
            team: team.into(),
            sub_position,
            price,
            rating: 0.0,
            form: 0.0,
            offense_power: 0.0,
            defense_power: 0.0,
            injured: false,
            raw_stats: RawStats::new(),
        };
        player.validate()?;
        Ok(player)
    }

    /// Set rating and form.
    #[must_use]
    pub fn with_rating(mut self, rating: f64, form: f64) -> Self {
        self.rating = rating;
        self.form = form;
        self
    }

    /// Set the offense/defense composites.
    #[must_use]
    pub fn with_powers(mut self, offense_power: f64, defense_power: f64) -> Self {
        self.offense_power = offense_power;
        self.defense_power = defense_power;
        self
    }

    /// Set one raw statistic.
    #[must_use]
    pub fn with_stat(mut self, name: impl Into<String>, value: f64) -> Self {
        self.raw_stats.insert(name.into(), value);
        self
    }

    /// Mark the player as injured.
    #[must_use]
    pub fn injured(mut self) -> Self {
        self.injured = true;
        self
    }

    /// Check the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyPlayerId);
        }
        if self.price < Decimal::ZERO {
            return Err(DomainError::NegativePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        Ok(())
    }

    /// Whether the player can be picked at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.injured
    }

    /// Raw value of a statistic, `None` when the stat is absent.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.raw_stats.get(name).copied()
    }
}
