//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigOptionArg;
use crate::adapter::inbound::cli::{output, paths};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the configuration a command should run with.
///
/// An explicit path must exist. Without one, the default path is used when
/// present and the built-in defaults otherwise.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or is invalid.
#[allow(clippy::result_large_err)]
pub fn resolve(arg: &ConfigOptionArg) -> Result<Config> {
    match &arg.config {
        Some(path) => Config::load(path),
        None => {
            let default = paths::default_config();
            if default.exists() {
                Config::load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: startingxi config validate -c {}",
        path.display()
    ));
    output::note("3. Run: startingxi optimize --players <file> --team <name>");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(arg: &ConfigOptionArg) -> Result<()> {
    let config = resolve(arg)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    let registry = config.formation_registry()?;

    output::section("Effective Configuration");
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);

    output::section("Optimizer");
    output::field("Formation", &config.optimizer.formation);
    output::field("Strategy", config.optimizer.strategy);
    output::field(
        "Flexible",
        if config.optimizer.allow_flexible {
            "yes"
        } else {
            "no"
        },
    );
    output::field(
        "Off-position",
        format!(
            "flat {:.0}%, suitability {:.0}% per 100 pts",
            config.optimizer.off_position.flat * 100.0,
            config.optimizer.off_position.suitability * 100.0
        ),
    );
    output::field("Tolerance", config.optimizer.tolerance);

    output::section("Strategies");
    for strategy in crate::domain::Strategy::ALL {
        let weights = config.strategies.get(strategy);
        output::field(
            strategy.name(),
            format!("off {:.2} / def {:.2}", weights.offense, weights.defense),
        );
    }

    output::section("Scorer");
    output::field("Normalization", format!("{:?}", config.scorer.normalization));
    output::field("Weight overrides", config.scorer.weights.len());
    output::field("Scale overrides", config.scorer.scales.len());

    output::section("Tables");
    output::field("Formations", registry.len());
    output::field(
        "Eligibility",
        if config.eligibility.is_some() {
            "configured"
        } else {
            "built-in"
        },
    );

    if output::verbosity() > 0 {
        output::section("TOML");
        output::lines(&config.to_toml()?);
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Path", path.display());
    output::field("Formations", config.formation_registry()?.len());
    Ok(())
}
