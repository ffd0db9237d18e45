use std::path::{Path, PathBuf};

use serde_json::json;
use startingxi::domain::Player;
use tempfile::TempDir;

/// Write `players` as a JSON dataset inside `dir`.
pub fn write_players(dir: &TempDir, players: &[Player]) -> PathBuf {
    let path = dir.path().join("players.json");
    let body = serde_json::to_string_pretty(players).expect("serialize players");
    std::fs::write(&path, body).expect("write players");
    path
}

/// Write a TOML config inside `dir`.
pub fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    path
}

/// A hand-written dataset with two teams in the file's own format.
pub fn write_raw(dir: &Path) -> PathBuf {
    let players: Vec<_> = ["GK", "CB", "CB", "RB", "LB", "CM", "CM", "CAM", "LW", "RW", "ST"]
        .iter()
        .enumerate()
        .map(|(i, pos)| {
            json!({
                "id": format!("h{:02}", i + 1),
                "name": format!("Home {}", i + 1),
                "team": "Home",
                "sub_position": pos,
                "price": 10,
                "rating": 70,
                "form": 6.5,
                "offense_power": 50,
                "defense_power": 50,
                "raw_stats": { "xg": 0.1 * i as f64, "tackles": 3.0 }
            })
        })
        .chain(std::iter::once(json!({
            "id": "a01",
            "name": "Away 1",
            "team": "Away",
            "sub_position": "ST",
            "price": "22.5",
            "rating": 88,
            "form": 8,
            "offense_power": 90,
            "defense_power": 20,
            "raw_stats": { "xg": 0.9, "shots": 4.5 }
        })))
        .collect();
    let path = dir.join("raw.json");
    std::fs::write(&path, serde_json::Value::Array(players).to_string()).expect("write raw");
    path
}
