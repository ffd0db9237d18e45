//! Play-style strategies and their objective weights.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::player::Player;

/// Tolerance used when checking that a weight pair sums to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Team play style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Balanced,
    Offensive,
    Defensive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Balanced, Strategy::Offensive, Strategy::Defensive];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::Offensive => "offensive",
            Strategy::Defensive => "defensive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DomainError;

    /// Accepts the English names and the Turkish labels
    /// (`dengeli`, `ofansif`, `defansif`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balanced" | "dengeli" => Ok(Strategy::Balanced),
            "offensive" | "ofansif" => Ok(Strategy::Offensive),
            "defensive" | "defansif" => Ok(Strategy::Defensive),
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Offense/defense weight pair for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    pub offense: f64,
    pub defense: f64,
}

impl WeightPair {
    #[must_use]
    pub const fn new(offense: f64, defense: f64) -> Self {
        Self { offense, defense }
    }

    fn validate(&self, owner: Strategy) -> Result<(), DomainError> {
        if self.offense < 0.0 || self.defense < 0.0 {
            return Err(DomainError::InvalidWeights {
                owner: owner.to_string(),
                reason: "weights must be non-negative".into(),
            });
        }
        if ((self.offense + self.defense) - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DomainError::InvalidWeights {
                owner: owner.to_string(),
                reason: format!("weights sum to {}, expected 1", self.offense + self.defense),
            });
        }
        Ok(())
    }
}

/// Strategy → `(w_off, w_def)` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyWeights {
    pub balanced: WeightPair,
    pub offensive: WeightPair,
    pub defensive: WeightPair,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            balanced: WeightPair::new(0.5, 0.5),
            offensive: WeightPair::new(0.7, 0.3),
            defensive: WeightPair::new(0.3, 0.7),
        }
    }
}

impl StrategyWeights {
    /// Weights for a strategy.
    #[must_use]
    pub fn get(&self, strategy: Strategy) -> WeightPair {
        match strategy {
            Strategy::Balanced => self.balanced,
            Strategy::Offensive => self.offensive,
            Strategy::Defensive => self.defensive,
        }
    }

    /// Per-player selection weight `w_off * offense + w_def * defense`.
    #[must_use]
    pub fn selection_weight(&self, strategy: Strategy, player: &Player) -> f64 {
        let weights = self.get(strategy);
        weights.offense * player.offense_power + weights.defense * player.defense_power
    }

    /// Check every pair is non-negative and sums to one.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeights`] naming the first bad strategy.
    pub fn validate(&self) -> Result<(), DomainError> {
        for strategy in Strategy::ALL {
            self.get(strategy).validate(strategy)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubPosition;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_names_and_turkish_labels() {
        assert_eq!("Offensive".parse::<Strategy>().unwrap(), Strategy::Offensive);
        assert_eq!("dengeli".parse::<Strategy>().unwrap(), Strategy::Balanced);
        assert_eq!("Defansif".parse::<Strategy>().unwrap(), Strategy::Defensive);
        assert!("gegenpress".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        StrategyWeights::default().validate().unwrap();
    }

    #[test]
    fn test_selection_weight() {
        let player = Player::try_new("1", "A", "T", SubPosition::CM, dec!(10))
            .unwrap()
            .with_powers(80.0, 60.0);
        let weights = StrategyWeights::default();

        assert!((weights.selection_weight(Strategy::Balanced, &player) - 70.0).abs() < 1e-9);
        assert!((weights.selection_weight(Strategy::Offensive, &player) - 74.0).abs() < 1e-9);
        assert!((weights.selection_weight(Strategy::Defensive, &player) - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let weights = StrategyWeights {
            offensive: WeightPair::new(0.8, 0.3),
            ..StrategyWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidWeights { owner, .. } if owner == "offensive"));
    }
}
