//! Suitability scorer configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::suitability::{Normalization, StatWeights, SuitabilityScorer};
use crate::domain::{DomainError, SubPosition};

/// Scorer settings. Weight and scale entries override the built-in tables.
///
/// ```toml
/// [scorer]
/// normalization = "min_max"
///
/// [scorer.weights.ST]
/// xg = 0.6
/// shots = 0.4
///
/// [scorer.scales]
/// xg = 0.8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub normalization: Normalization,
    /// Position code → replacement weight vector.
    pub weights: BTreeMap<String, StatWeights>,
    /// Stat name → reference scale.
    pub scales: BTreeMap<String, f64>,
}

impl ScorerConfig {
    /// Build the scorer, validating every resulting weight vector.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownPosition`] for a bad position key and
    /// [`DomainError::InvalidWeights`] for a bad vector.
    pub fn build(&self) -> Result<SuitabilityScorer, DomainError> {
        let weights = self
            .weights
            .iter()
            .map(|(code, vector)| Ok((code.parse::<SubPosition>()?, vector.clone())))
            .collect::<Result<BTreeMap<_, _>, DomainError>>()?;
        SuitabilityScorer::with_overrides(&weights, &self.scales, self.normalization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds() {
        let scorer = ScorerConfig::default().build().unwrap();
        assert_eq!(scorer.normalization(), Normalization::Reference);
    }

    #[test]
    fn test_unknown_position_key() {
        let mut config = ScorerConfig::default();
        config.weights.insert("SW".to_string(), StatWeights::new());
        assert_eq!(
            config.build().unwrap_err(),
            DomainError::UnknownPosition("SW".to_string())
        );
    }
}
