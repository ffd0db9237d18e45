//! Optimizer defaults.

use serde::{Deserialize, Serialize};

use crate::application::lineup::{OffPositionPenalty, DEFAULT_TOLERANCE};
use crate::domain::Strategy;

/// Defaults applied when a command does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Formation used when none is given.
    pub formation: String,
    pub strategy: Strategy,
    /// Allow players into slots listed for them in the eligibility map.
    pub allow_flexible: bool,
    /// Relative tolerance used when locking the score and cost optima.
    pub tolerance: f64,
    pub off_position: OffPositionPenalty,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            formation: "4-3-3".to_string(),
            strategy: Strategy::default(),
            allow_flexible: true,
            tolerance: DEFAULT_TOLERANCE,
            off_position: OffPositionPenalty::default(),
        }
    }
}
