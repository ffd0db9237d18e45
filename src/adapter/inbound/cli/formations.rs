//! Formation listing and details.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ConfigOptionArg;
use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;

#[derive(Tabled)]
struct FormationRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slots")]
    slots: String,
}

/// List registered formations.
pub fn list(arg: &ConfigOptionArg) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let registry = config::resolve(arg)?.formation_registry()?;

    if output::is_json() {
        let formations: Vec<_> = registry.iter().collect();
        output::json_output(json!({
            "command": "formations.list",
            "formations": formations,
        }));
        return Ok(());
    }

    output::section("Available formations");
    let rows: Vec<FormationRow> = registry
        .iter()
        .map(|f| FormationRow {
            name: f.name.clone(),
            slots: f.slot_summary(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "run {} for details",
        output::highlight("startingxi formations show <name>")
    ));
    Ok(())
}

/// Show one formation.
pub fn show(name: &str, arg: &ConfigOptionArg) -> Result<()> {
    let registry = config::resolve(arg)?.formation_registry()?;
    let formation = registry.get(name)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "formations.show",
            "formation": formation,
        }));
        return Ok(());
    }

    output::section(&formation.name);
    if !formation.description.is_empty() {
        output::note(&formation.description);
    }
    for (position, count) in formation.groups() {
        output::field(
            &format!("{position} ({})", position.group()),
            count,
        );
    }
    Ok(())
}
