//! JSON player dataset.
//!
//! The file is a JSON array of already-normalized player records:
//!
//! ```json
//! [
//!   {
//!     "id": "p001", "name": "A. Keeper", "team": "Ankara", "sub_position": "GK",
//!     "price": "4.5", "rating": 78, "form": 6.9,
//!     "offense_power": 20.0, "defense_power": 81.0,
//!     "injured": false,
//!     "raw_stats": { "saves": 3.1, "save_pct": 71.0 }
//!   }
//! ]
//! ```
//!
//! Prices may be written as numbers or strings.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::domain::{DomainError, Player};
use crate::error::{DatasetError, Result};

/// Read and validate a player file.
///
/// # Errors
///
/// Returns [`DatasetError`] when the file cannot be read or parsed, and
/// [`DomainError`] for a duplicate id, blank id or negative price.
pub fn load_players<P: AsRef<Path>>(path: P) -> Result<Vec<Player>> {
    let path = path.as_ref();
    let path_display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::ReadFile {
        path: path_display.clone(),
        source,
    })?;
    let players = parse_players(&content).map_err(|e| match e {
        crate::error::Error::Json(source) => DatasetError::Parse {
            path: path_display.clone(),
            source,
        }
        .into(),
        other => other,
    })?;
    debug!(path = %path_display, players = players.len(), "player dataset loaded");
    Ok(players)
}

/// Parse and validate player records from JSON text.
///
/// # Errors
///
/// Same as [`load_players`], minus the I/O failures.
pub fn parse_players(content: &str) -> Result<Vec<Player>> {
    let players: Vec<Player> = serde_json::from_str(content)?;
    let mut seen = BTreeSet::new();
    for player in &players {
        player.validate()?;
        if !seen.insert(&player.id) {
            return Err(DomainError::DuplicatePlayer {
                id: player.id.clone(),
            }
            .into());
        }
    }
    Ok(players)
}

/// A team's available players, in ascending id order.
///
/// # Errors
///
/// Returns [`DatasetError::UnknownTeam`] when no player belongs to `team`.
pub fn team_pool(players: &[Player], team: &str) -> Result<Vec<Player>> {
    if !players.iter().any(|p| p.team == team) {
        return Err(DatasetError::UnknownTeam(team.to_string()).into());
    }
    let mut pool: Vec<Player> = players
        .iter()
        .filter(|p| p.team == team && p.is_available())
        .cloned()
        .collect();
    pool.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(pool)
}

/// Distinct team names, sorted.
#[must_use]
pub fn teams(players: &[Player]) -> Vec<String> {
    players
        .iter()
        .map(|p| p.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
