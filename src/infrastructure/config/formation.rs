//! Formation and eligibility tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, EligibilityMap, Formation, FormationRegistry, SubPosition};

/// A formation declared in configuration.
///
/// ```toml
/// [formations."4-3-3-false9"]
/// description = "Striker drops into midfield."
/// slots = { GK = 1, CB = 2, RB = 1, LB = 1, CM = 3, LW = 1, RW = 1, CAM = 1 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    pub description: String,
    /// Position code → slot count.
    pub slots: BTreeMap<String, usize>,
}

impl FormationConfig {
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownPosition`] or
    /// [`DomainError::MalformedFormation`].
    pub fn build(&self, name: &str) -> Result<Formation, DomainError> {
        let groups = self
            .slots
            .iter()
            .map(|(code, count)| Ok((code.parse::<SubPosition>()?, *count)))
            .collect::<Result<Vec<_>, DomainError>>()?;
        Formation::try_new(name, self.description.clone(), groups)
    }
}

/// Built-in formations plus configured ones; a configured name replaces the
/// built-in of the same name.
///
/// # Errors
///
/// Returns the first configured formation that fails to build.
pub fn build_registry(
    configured: &BTreeMap<String, FormationConfig>,
) -> Result<FormationRegistry, DomainError> {
    let mut formations: BTreeMap<String, Formation> = FormationRegistry::default()
        .iter()
        .map(|f| (f.name.clone(), f.clone()))
        .collect();
    for (name, entry) in configured {
        formations.insert(name.clone(), entry.build(name)?);
    }
    FormationRegistry::from_formations(formations.into_values())
}

/// The configured eligibility table, or the built-in one when absent.
///
/// ```toml
/// [eligibility]
/// RB = ["RM", "CB"]
/// ST = ["LW", "RW", "CAM"]
/// ```
///
/// # Errors
///
/// Returns [`DomainError::UnknownPosition`] for a bad code.
pub fn build_eligibility(
    configured: Option<&BTreeMap<String, Vec<String>>>,
) -> Result<EligibilityMap, DomainError> {
    let Some(table) = configured else {
        return Ok(EligibilityMap::default());
    };
    let entries = table
        .iter()
        .map(|(slot, codes)| {
            let positions = codes
                .iter()
                .map(|c| c.parse::<SubPosition>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok((slot.parse::<SubPosition>()?, positions))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;
    Ok(EligibilityMap::from_entries(entries))
}
