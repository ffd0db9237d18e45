//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; an empty file yields the built-in tables.
//!
//! # Example
//!
//! ```no_run
//! use startingxi::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::formation::{build_eligibility, build_registry, FormationConfig};
use super::logging::LoggingConfig;
use super::optimizer::OptimizerConfig;
use super::scorer::ScorerConfig;
use crate::application::lineup::LineupOptimizer;
use crate::application::suitability::SuitabilityScorer;
use crate::domain::{EligibilityMap, FormationRegistry, StrategyWeights};
use crate::error::{ConfigError, Result};
use crate::port::Solver;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. The read-only tables it describes are built once
/// and passed explicitly to the checker, scorer and optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Optimizer defaults and off-position penalty.
    pub optimizer: OptimizerConfig,

    /// Suitability scorer normalization, weights and scales.
    pub scorer: ScorerConfig,

    /// Extra or replacement formations, keyed by name.
    pub formations: BTreeMap<String, FormationConfig>,

    /// Replacement eligibility table (slot → player positions).
    ///
    /// Replaces the built-in table entirely when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<BTreeMap<String, Vec<String>>>,

    /// Strategy → offense/defense weights.
    pub strategies: StrategyWeights,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., weights that do not sum to one)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[allow(clippy::result_large_err)]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Validate configuration values.
    ///
    /// Checks that every table builds and that values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.logging.format),
            }
            .into());
        }
        if self.optimizer.formation.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "optimizer.formation",
            }
            .into());
        }
        if !(self.optimizer.tolerance > 0.0 && self.optimizer.tolerance < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "optimizer.tolerance",
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            }
            .into());
        }
        self.optimizer
            .off_position
            .validate()
            .map_err(|e| invalid("optimizer.off_position", &e))?;
        self.strategies
            .validate()
            .map_err(|e| invalid("strategies", &e))?;

        let registry = self.formation_registry()?;
        if let Err(e) = registry.get(&self.optimizer.formation) {
            return Err(invalid("optimizer.formation", &e));
        }
        self.eligibility_map()?;
        self.scorer()?;
        Ok(())
    }

    /// Built-in formations merged with the configured ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a malformed formation.
    #[allow(clippy::result_large_err)]
    pub fn formation_registry(&self) -> Result<FormationRegistry> {
        build_registry(&self.formations).map_err(|e| invalid("formations", &e))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown position code.
    #[allow(clippy::result_large_err)]
    pub fn eligibility_map(&self) -> Result<EligibilityMap> {
        build_eligibility(self.eligibility.as_ref()).map_err(|e| invalid("eligibility", &e))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a bad weight vector.
    #[allow(clippy::result_large_err)]
    pub fn scorer(&self) -> Result<SuitabilityScorer> {
        self.scorer.build().map_err(|e| invalid("scorer", &e))
    }

    /// Optimizer wired with every configured table and the given backend.
    ///
    /// # Errors
    ///
    /// Returns the first table that fails to build.
    #[allow(clippy::result_large_err)]
    pub fn optimizer(&self, solver: Arc<dyn Solver>) -> Result<LineupOptimizer> {
        Ok(LineupOptimizer::new(solver)
            .with_eligibility(self.eligibility_map()?)
            .with_strategies(self.strategies.clone())
            .with_scorer(self.scorer()?)
            .with_penalty(self.optimizer.off_position)
            .with_tolerance(self.optimizer.tolerance))
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn invalid(field: &'static str, error: &dyn std::error::Error) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: error.to_string(),
    }
    .into()
}
