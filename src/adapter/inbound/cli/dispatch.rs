//! Subcommand routing.

use super::command::{Commands, ConfigCommand, FormationCommand};
use super::{availability, config, formations, optimize, recommend, squad};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Route a parsed subcommand to its handler.
///
/// # Errors
///
/// Returns whatever the handler returns.
#[allow(clippy::result_large_err)]
pub fn dispatch(command: &Commands) -> Result<()> {
    match command {
        Commands::Optimize(args) => optimize::execute(args),
        Commands::Availability(args) => availability::execute(args),
        Commands::Recommend(args) => recommend::execute(args),
        Commands::Squad(args) => squad::execute(args),
        Commands::Formations(FormationCommand::List(arg)) => formations::list(arg),
        Commands::Formations(FormationCommand::Show { name, config }) => {
            formations::show(name, config)
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(arg),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}

/// Config the command will run with, for logging setup before dispatch.
///
/// Falls back to defaults when the file is unreadable so the handler can
/// report the real error.
#[must_use]
pub fn logging_config(command: &Commands) -> Config {
    let arg = match command {
        Commands::Optimize(args) => Some(&args.config),
        Commands::Availability(args) => Some(&args.config),
        Commands::Recommend(args) => Some(&args.config),
        Commands::Squad(args) => Some(&args.config),
        Commands::Formations(FormationCommand::List(arg) | FormationCommand::Show { config: arg, .. }) => {
            Some(arg)
        }
        Commands::Config(ConfigCommand::Show(arg)) => Some(arg),
        Commands::Config(_) => None,
    };
    arg.and_then(|a| config::resolve(a).ok()).unwrap_or_default()
}
