//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use rust_decimal_macros::dec;
use startingxi::domain::SubPosition;
use support::dataset::{write_config, write_players, write_raw};
use support::squad::{exact_pool, player, FOUR_THREE_THREE};
use tempfile::TempDir;

fn startingxi() -> Command {
    let mut cmd = cargo_bin_cmd!("startingxi");
    // Keep the user's own ~/.startingxi/config.toml out of the picture.
    cmd.env("HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_help() {
    startingxi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("optimize"))
        .stdout(predicate::str::contains("availability"))
        .stdout(predicate::str::contains("recommend"));
}

#[test]
fn test_version() {
    startingxi()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("startingxi"));
}

#[test]
fn test_optimize_json_prints_lineup() {
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &exact_pool(&FOUR_THREE_THREE));

    let output = startingxi()
        .args(["--json", "optimize", "--team", "Home", "--budget", "110", "--players"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["command"], "optimize");
    assert_eq!(doc["status"], "Optimal");
    assert_eq!(doc["formation"], "4-3-3");
    assert_eq!(doc["lineup"].as_array().map(Vec::len), Some(11));
}

#[test]
fn test_optimize_reports_infeasible_budget() {
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &exact_pool(&FOUR_THREE_THREE));

    let output = startingxi()
        .args(["--json", "optimize", "-t", "Home", "-b", "50", "-p"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["status"], "Infeasible");
    assert_eq!(doc["lineup"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_optimize_rejects_small_squad() {
    let dir = TempDir::new().unwrap();
    let mut squad = exact_pool(&FOUR_THREE_THREE);
    squad.pop();
    let players = write_players(&dir, &squad);

    startingxi()
        .args(["optimize", "--team", "Home", "--players"])
        .arg(&players)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 11"));
}

#[test]
fn test_optimize_text_output() {
    let dir = TempDir::new().unwrap();
    let players = write_raw(dir.path());

    startingxi()
        .args(["--color", "never", "optimize", "--team", "Home", "--strategy", "ofansif", "--players"])
        .arg(&players)
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting XI"))
        .stdout(predicate::str::contains("Home 11"));
}

#[test]
fn test_unknown_team_fails() {
    let dir = TempDir::new().unwrap();
    let players = write_raw(dir.path());

    startingxi()
        .args(["squad", "--team", "Nowhere", "--players"])
        .arg(&players)
        .assert()
        .failure()
        .stdout(predicate::str::contains("known teams: Away, Home"))
        .stderr(predicate::str::contains("Nowhere"));
}

#[test]
fn test_invalid_config_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[strategies.balanced]\noffense = 0.9\ndefense = 0.9\n");

    startingxi()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn test_availability_json_lists_deficits() {
    use SubPosition::*;
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &exact_pool(&[GK, CB, CB, CB, LB, CM, CM, CAM, LW, RW, ST]));

    let output = startingxi()
        .args(["--json", "availability", "--team", "Home", "--players"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["sufficient"], false);
}

#[test]
fn test_recommend_json_ranks_players() {
    let dir = TempDir::new().unwrap();
    let squad = vec![
        player("a", SubPosition::ST, dec!(5), 50.0).with_stat("xg", 0.2),
        player("b", SubPosition::ST, dec!(5), 50.0).with_stat("xg", 0.8),
        player("c", SubPosition::GK, dec!(5), 50.0).with_stat("xg", 3.0),
    ];
    let players = write_players(&dir, &squad);

    let output = startingxi()
        .args(["--json", "recommend", "--position", "ST", "--players"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = doc["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["player"]["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_squad_json_summary() {
    let dir = TempDir::new().unwrap();
    let players = write_raw(dir.path());

    startingxi()
        .args(["--json", "squad", "--team", "Away", "--players"])
        .arg(&players)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"healthy\":1"));
}

#[test]
fn test_formations_list() {
    startingxi()
        .args(["--color", "never", "formations", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4-3-3"))
        .stdout(predicate::str::contains("3-5-2"));
}

#[test]
fn test_formations_show_unknown_fails() {
    startingxi()
        .args(["formations", "show", "1-1-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown formation"));
}

/// Exact 4-3-3 pool plus an injured, expensive striker `x01`.
fn pool_with_injured_star() -> Vec<startingxi::domain::Player> {
    let mut squad = exact_pool(&FOUR_THREE_THREE);
    squad.push(player("x01", SubPosition::ST, dec!(50), 95.0).injured());
    squad
}

#[test]
fn test_optimize_json_groups_the_lineup() {
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &exact_pool(&FOUR_THREE_THREE));

    let output = startingxi()
        .args(["--json", "optimize", "--team", "Home", "--budget", "110", "--players"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups: Vec<(&str, u64)> = doc["groups"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|g| Some((g["group"].as_str()?, g["players"].as_u64()?)))
        .collect();
    assert_eq!(
        groups,
        vec![("goalkeeper", 1), ("defence", 4), ("midfield", 3), ("attack", 3)]
    );
}

#[test]
fn test_optimize_text_shows_group_table() {
    let dir = TempDir::new().unwrap();
    let players = write_raw(dir.path());

    startingxi()
        .args(["--color", "never", "optimize", "--team", "Home", "--players"])
        .arg(&players)
        .assert()
        .success()
        .stdout(predicate::str::contains("By position group"))
        .stdout(predicate::str::contains("midfield"));
}

#[test]
fn test_optimize_default_budget_spans_the_whole_team() {
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &pool_with_injured_star());

    let output = startingxi()
        .args(["--json", "optimize", "--team", "Home", "--players"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // 50 for the injured striker plus the ten dearest at 10.
    assert_eq!(doc["budget"], "150");
    assert_eq!(doc["status"], "Optimal");
}

#[test]
fn test_squad_json_lists_and_marks_the_eleven() {
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &pool_with_injured_star());

    let output = startingxi()
        .args(["--json", "squad", "-t", "Home", "--list", "--mark-xi", "--sort", "price", "-p"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["lineup_status"], "Optimal");
    assert_eq!(doc["summary"]["budget_range"]["max"], "150");

    let listed = doc["players"].as_array().unwrap();
    assert_eq!(listed.len(), 12);
    assert_eq!(listed[0]["player"]["id"], "x01");
    assert_eq!(listed[0]["in_lineup"], false);
    assert!(listed[1..].iter().all(|e| e["in_lineup"] == true));
}

#[test]
fn test_squad_list_filters_by_position_and_fitness() {
    let dir = TempDir::new().unwrap();
    let players = write_players(&dir, &pool_with_injured_star());

    startingxi()
        .args([
            "--color", "never", "squad", "-t", "Home", "--list", "--position", "st", "--fitness",
            "injured", "-p",
        ])
        .arg(&players)
        .assert()
        .success()
        .stdout(predicate::str::contains("Player x01"))
        .stdout(predicate::str::contains("Player p11").not())
        .stdout(predicate::str::contains("1 players"));
}

#[test]
fn test_squad_without_list_omits_players() {
    let dir = TempDir::new().unwrap();
    let players = write_raw(dir.path());

    let output = startingxi()
        .args(["--json", "squad", "--team", "Home", "--players"])
        .arg(&players)
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(doc.get("players").is_none());
    assert!(doc.get("lineup_status").is_none());
}
