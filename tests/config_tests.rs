//! Integration tests for TOML configuration loading and validation.

mod support;

use std::sync::Arc;

use rust_decimal_macros::dec;
use startingxi::adapter::solver::HiGHSSolver;
use startingxi::application::Normalization;
use startingxi::domain::{LineupStatus, Strategy, SubPosition};
use startingxi::error::Error;
use startingxi::infrastructure::config::Config;
use support::dataset::write_config;
use support::squad::exact_pool;
use tempfile::TempDir;

#[test]
fn shipped_template_loads_as_defaults() {
    let template = include_str!("../config.toml.example");
    assert_eq!(Config::parse_toml(template).unwrap(), Config::default());
}

#[test]
fn load_reads_a_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[optimizer]\nformation = \"3-5-2\"\nstrategy = \"defansif\"\n",
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(config.optimizer.formation, "3-5-2");
    assert_eq!(config.optimizer.strategy, Strategy::Defensive);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn weights_must_sum_to_one() {
    let toml = "[scorer.weights.ST]\nxg = 0.5\nshots = 0.2\n";
    assert!(Config::parse_toml(toml).is_err());

    let toml = "[strategies.balanced]\noffense = 0.6\ndefense = 0.6\n";
    assert!(Config::parse_toml(toml).is_err());
}

#[test]
fn negative_weights_are_rejected() {
    let toml = "[scorer.weights.CB]\ntackles = 1.5\nclearances = -0.5\n";
    assert!(Config::parse_toml(toml).is_err());
}

#[test]
fn unknown_position_keys_are_rejected() {
    assert!(Config::parse_toml("[scorer.weights.XX]\nxg = 1.0\n").is_err());
    assert!(Config::parse_toml("[eligibility]\nRB = [\"SW\"]\n").is_err());
}

#[test]
fn formations_must_have_eleven_slots() {
    let toml = "[formations.\"4-4-1\"]\nslots = { GK = 1, CB = 2, RB = 1, LB = 1, CM = 2, RM = 1, LM = 1, ST = 1 }\n";
    assert!(Config::parse_toml(toml).is_err());
}

#[test]
fn custom_formation_becomes_selectable() {
    let config = Config::parse_toml(
        r#"
        [optimizer]
        formation = "4-3-3-false9"

        [formations."4-3-3-false9"]
        description = "Striker drops into midfield."
        slots = { GK = 1, CB = 2, RB = 1, LB = 1, CM = 3, CAM = 1, LW = 1, RW = 1 }
        "#,
    )
    .unwrap();
    let registry = config.formation_registry().unwrap();
    let shape = registry.get("4-3-3-false9").unwrap();
    assert_eq!(shape.required(SubPosition::CM), 3);
    assert_eq!(shape.required(SubPosition::ST), 0);
    assert!(registry.get("4-3-3").is_ok());
}

#[test]
fn scorer_section_builds_the_scorer() {
    let config = Config::parse_toml(
        r#"
        [scorer]
        normalization = "min_max"

        [scorer.weights.ST]
        xg = 1.0
        "#,
    )
    .unwrap();
    let scorer = config.scorer().unwrap();
    assert_eq!(scorer.normalization(), Normalization::MinMax);
    assert_eq!(scorer.weights_for(SubPosition::ST).len(), 1);
}

#[test]
fn eligibility_table_drives_the_optimizer() {
    use SubPosition::*;
    let config = Config::parse_toml("[eligibility]\nRB = [\"CB\"]\n").unwrap();
    let optimizer = config.optimizer(Arc::new(HiGHSSolver::new())).unwrap();

    let pool = exact_pool(&[GK, CB, CB, CB, LB, CM, CM, CAM, LW, RW, ST]);
    let registry = config.formation_registry().unwrap();
    let solution = optimizer
        .solve(&pool, registry.get("4-3-3").unwrap(), dec!(200), Strategy::Balanced, true)
        .unwrap();
    assert_eq!(solution.status, LineupStatus::Optimal);
}
