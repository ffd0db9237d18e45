//! Player sub-positions.
//!
//! A sub-position is the specific on-field role of a player (CB, CAM, ST...),
//! finer grained than the broad goalkeeper/defence/midfield/attack groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The fixed enumeration of sub-positions.
///
/// Variant order is pitch order (goal to attack), which is also the order
/// used when listing formation slot-groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubPosition {
    GK,
    CB,
    RB,
    LB,
    DM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    ST,
}

/// Broad positional group of a sub-position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionGroup {
    Goalkeeper,
    Defence,
    Midfield,
    Attack,
}

impl SubPosition {
    /// Every sub-position in pitch order.
    pub const ALL: [SubPosition; 12] = [
        SubPosition::GK,
        SubPosition::CB,
        SubPosition::RB,
        SubPosition::LB,
        SubPosition::DM,
        SubPosition::CM,
        SubPosition::CAM,
        SubPosition::LM,
        SubPosition::RM,
        SubPosition::LW,
        SubPosition::RW,
        SubPosition::ST,
    ];

    /// Upper-case code, e.g. `"CAM"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            SubPosition::GK => "GK",
            SubPosition::CB => "CB",
            SubPosition::RB => "RB",
            SubPosition::LB => "LB",
            SubPosition::DM => "DM",
            SubPosition::CM => "CM",
            SubPosition::CAM => "CAM",
            SubPosition::LM => "LM",
            SubPosition::RM => "RM",
            SubPosition::LW => "LW",
            SubPosition::RW => "RW",
            SubPosition::ST => "ST",
        }
    }

    #[must_use]
    pub const fn group(self) -> PositionGroup {
        match self {
            SubPosition::GK => PositionGroup::Goalkeeper,
            SubPosition::CB | SubPosition::RB | SubPosition::LB => PositionGroup::Defence,
            SubPosition::DM
            | SubPosition::CM
            | SubPosition::CAM
            | SubPosition::LM
            | SubPosition::RM => PositionGroup::Midfield,
            SubPosition::LW | SubPosition::RW | SubPosition::ST => PositionGroup::Attack,
        }
    }
}

impl fmt::Display for SubPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SubPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| DomainError::UnknownPosition(s.to_string()))
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PositionGroup::Goalkeeper => "goalkeeper",
            PositionGroup::Defence => "defence",
            PositionGroup::Midfield => "midfield",
            PositionGroup::Attack => "attack",
        };
        f.write_str(name)
    }
}
