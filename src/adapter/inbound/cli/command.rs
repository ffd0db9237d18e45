//! Command-line interface definitions.
//!
//! Defines the CLI structure for the startingxi application using `clap`.
//! The CLI supports subcommands for picking a lineup, checking formation
//! availability, ranking players for a position, summarizing a squad and
//! managing configuration.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::application::recommend::DEFAULT_LIMIT;
use crate::application::squad::{Fitness, SquadSort};
use crate::domain::{Strategy, SubPosition};

/// Starting-lineup optimizer for football squads
#[derive(Parser, Debug)]
#[command(name = "startingxi")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the startingxi CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick the best starting eleven for a team
    Optimize(OptimizeArgs),

    /// Check whether a team can fill a formation
    Availability(AvailabilityArgs),

    /// Rank players for a position
    Recommend(RecommendArgs),

    /// Summarize a team's squad and budget range, optionally listing players
    Squad(SquadArgs),

    /// Explore available formations
    #[command(subcommand)]
    Formations(FormationCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `startingxi formations`.
#[derive(Subcommand, Debug)]
pub enum FormationCommand {
    /// List all registered formations.
    List(ConfigOptionArg),
    /// Show the slots of one formation.
    Show {
        /// Formation name (e.g., "4-3-3").
        name: String,
        #[command(flatten)]
        config: ConfigOptionArg,
    },
}

/// Subcommands for `startingxi config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigOptionArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional configuration path.
///
/// Without `--config`, `~/.startingxi/config.toml` is used when it exists and
/// the built-in defaults otherwise.
#[derive(Parser, Debug, Default)]
pub struct ConfigOptionArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Shared argument struct for commands that require a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Player dataset and team selection.
#[derive(Parser, Debug)]
pub struct TeamArgs {
    /// Path to the JSON player file.
    #[arg(short, long)]
    pub players: PathBuf,

    /// Team name as it appears in the player file.
    #[arg(short, long)]
    pub team: String,
}

/// Arguments for the `optimize` subcommand.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub team: TeamArgs,

    /// Formation name (defaults to `optimizer.formation`).
    #[arg(short, long)]
    pub formation: Option<String>,

    /// Spending ceiling in millions (defaults to the team's most expensive eleven).
    #[arg(short, long)]
    pub budget: Option<Decimal>,

    /// Play style: balanced, offensive or defensive.
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Only place players in their own sub-position.
    #[arg(long)]
    pub exact_positions: bool,

    #[command(flatten)]
    pub config: ConfigOptionArg,
}

/// Arguments for the `availability` subcommand.
#[derive(Parser, Debug)]
pub struct AvailabilityArgs {
    #[command(flatten)]
    pub team: TeamArgs,

    /// Formation name (defaults to `optimizer.formation`).
    #[arg(short, long)]
    pub formation: Option<String>,

    /// Only count players in their own sub-position.
    #[arg(long)]
    pub exact_positions: bool,

    #[command(flatten)]
    pub config: ConfigOptionArg,
}

/// Arguments for the `recommend` subcommand.
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Path to the JSON player file.
    #[arg(short, long)]
    pub players: PathBuf,

    /// Target sub-position code (e.g., ST, CAM).
    #[arg(long)]
    pub position: SubPosition,

    /// Restrict to one team.
    #[arg(short, long)]
    pub team: Option<String>,

    /// Number of players to list.
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    #[command(flatten)]
    pub config: ConfigOptionArg,
}

/// Arguments for the `squad` subcommand.
#[derive(Parser, Debug)]
pub struct SquadArgs {
    #[command(flatten)]
    pub team: TeamArgs,

    /// List the players below the summary.
    #[arg(short, long)]
    pub list: bool,

    /// Only list these sub-positions (comma separated, e.g. CB,ST).
    #[arg(long = "position", value_delimiter = ',')]
    pub positions: Vec<SubPosition>,

    /// Only list players with this injury status.
    #[arg(long, value_enum, default_value_t = FitnessArg::All)]
    pub fitness: FitnessArg,

    /// Column to order the listing by, highest first.
    #[arg(long, value_enum, default_value_t = SortArg::Rating)]
    pub sort: SortArg,

    /// Star the players of the default optimal eleven.
    #[arg(long)]
    pub mark_xi: bool,

    #[command(flatten)]
    pub config: ConfigOptionArg,
}

/// Injury filter for `squad --list`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FitnessArg {
    /// Everyone
    #[default]
    All,
    /// Only players fit to play
    Healthy,
    /// Only injured players
    Injured,
}

impl From<FitnessArg> for Fitness {
    fn from(arg: FitnessArg) -> Self {
        match arg {
            FitnessArg::All => Fitness::All,
            FitnessArg::Healthy => Fitness::Healthy,
            FitnessArg::Injured => Fitness::Injured,
        }
    }
}

/// Sort column for `squad --list`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortArg {
    #[default]
    Rating,
    Price,
    Form,
    Offense,
    Defense,
}

impl From<SortArg> for SquadSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Rating => SquadSort::Rating,
            SortArg::Price => SquadSort::Price,
            SortArg::Form => SquadSort::Form,
            SortArg::Offense => SquadSort::Offense,
            SortArg::Defense => SquadSort::Defense,
        }
    }
}

/// Arguments for the `config init` subcommand.
///
/// Controls configuration file generation from the built-in template.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
