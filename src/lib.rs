//! StartingXI - formation-aware starting-lineup optimization.
//!
//! Picks the best eleven players from a squad for a formation and a budget,
//! scores how well a player fits a position from raw statistics, and checks
//! whether a squad can fill a formation at all.
//!
//! # Architecture
//!
//! - **`domain`** - Players, positions, formations, eligibility and results
//! - **`port`** - The LP/ILP [`port::Solver`] seam
//! - **`application`** - Lineup optimizer, suitability scorer, availability
//!   checker, recommendations and squad summaries
//! - **`adapter`** - HiGHS solver backend, JSON dataset loader and the CLI
//! - **`infrastructure`** - TOML configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rust_decimal_macros::dec;
//! use startingxi::adapter::outbound::dataset::{load_players, team_pool};
//! use startingxi::adapter::solver::HiGHSSolver;
//! use startingxi::domain::{FormationRegistry, Strategy};
//! use startingxi::application::LineupOptimizer;
//!
//! let players = load_players("players.json")?;
//! let pool = team_pool(&players, "Galatasaray")?;
//! let registry = FormationRegistry::default();
//! let optimizer = LineupOptimizer::new(Arc::new(HiGHSSolver::new()));
//! let lineup = optimizer.solve(&pool, registry.get("4-3-3")?, dec!(120), Strategy::Balanced, true)?;
//! println!("{} ({})", lineup.status, lineup.total_score);
//! # Ok::<(), startingxi::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
