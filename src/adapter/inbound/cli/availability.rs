//! Handler for the `availability` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::AvailabilityArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::dataset::{load_players, team_pool};
use crate::application::availability::check_formation_availability;
use crate::error::Result;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Slot")]
    position: String,
    #[tabled(rename = "Required")]
    required: usize,
    #[tabled(rename = "Exact")]
    exact: usize,
    #[tabled(rename = "Available")]
    available: usize,
    #[tabled(rename = "OK")]
    sufficient: &'static str,
}

/// Execute the availability command.
pub fn execute(args: &AvailabilityArgs) -> Result<()> {
    let config = config::resolve(&args.config)?;
    let players = load_players(&args.team.players)?;
    let pool = team_pool(&players, &args.team.team)?;
    let registry = config.formation_registry()?;
    let formation = registry.get(
        args.formation
            .as_deref()
            .unwrap_or(&config.optimizer.formation),
    )?;
    let eligibility = config.eligibility_map()?;
    let allow_flexible = config.optimizer.allow_flexible && !args.exact_positions;

    let report = check_formation_availability(&pool, formation, &eligibility, allow_flexible);

    if output::is_json() {
        output::json_output(json!({
            "command": "availability",
            "team": args.team.team,
            "allow_flexible": allow_flexible,
            "sufficient": report.sufficient(),
            "report": report,
        }));
        return Ok(());
    }

    output::section(&format!("{} availability for {}", formation.name, args.team.team));
    let rows: Vec<GroupRow> = report
        .groups
        .iter()
        .map(|g| GroupRow {
            position: g.position.to_string(),
            required: g.required,
            exact: g.exact,
            available: g.available,
            sufficient: if g.sufficient { "yes" } else { "no" },
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    if report.sufficient() {
        output::success(&format!("{} healthy players can fill every slot-group", pool.len()));
    } else {
        for deficit in report.deficits() {
            output::warning(&format!(
                "{} short by {}",
                deficit.position,
                output::negative(deficit.shortfall())
            ));
        }
        if !allow_flexible {
            output::hint("flexible positions are off; drop --exact-positions to count cover players");
        }
    }
    Ok(())
}
