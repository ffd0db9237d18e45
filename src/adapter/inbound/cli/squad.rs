//! Handler for the `squad` command.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::adapter::inbound::cli::command::SquadArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::dataset::{load_players, team_pool, teams};
use crate::adapter::solver::HiGHSSolver;
use crate::application::squad::{list_squad, BudgetRange, SquadFilter, SquadSummary};
use crate::domain::{LineupStatus, Player, PlayerId, LINEUP_SIZE};
use crate::error::{DatasetError, Result};
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "XI")]
    marker: &'static str,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Pos")]
    position: String,
    #[tabled(rename = "OVR")]
    rating: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Form")]
    form: String,
    #[tabled(rename = "Off")]
    offense: String,
    #[tabled(rename = "Def")]
    defense: String,
    #[tabled(rename = "Fit")]
    fitness: &'static str,
}

/// Execute the squad command.
pub fn execute(args: &SquadArgs) -> Result<()> {
    let players = load_players(&args.team.players)?;
    let summary = SquadSummary::from_players(&players, &args.team.team);
    if summary.players == 0 {
        if !output::is_json() {
            output::hint(&format!("known teams: {}", teams(&players).join(", ")));
        }
        return Err(DatasetError::UnknownTeam(args.team.team.clone()).into());
    }

    let (lineup, lineup_status) = if args.mark_xi {
        let config = config::resolve(&args.config)?;
        default_xi(&config, &players, &args.team.team)?
    } else {
        (BTreeSet::new(), None)
    };

    let filter = SquadFilter {
        positions: args.positions.iter().copied().collect(),
        fitness: args.fitness.into(),
        sort: args.sort.into(),
    };
    let listing = if args.list {
        list_squad(&players, &args.team.team, &filter, &lineup)
    } else {
        Vec::new()
    };

    if output::is_json() {
        let mut document = json!({
            "command": "squad",
            "summary": summary,
        });
        if args.list {
            document["players"] = json!(listing);
        }
        if let Some(status) = lineup_status {
            document["lineup_status"] = json!(status);
        }
        output::json_output(document);
        return Ok(());
    }

    output::section(&format!("Squad: {}", summary.team));
    output::field("Players", summary.players);
    output::field(
        "Healthy",
        format!(
            "{} {}",
            summary.healthy,
            output::muted(format!("({} injured)", summary.players - summary.healthy))
        ),
    );
    output::field("Squad value", format!("{}M", summary.total_value));
    output::field(
        "Budget range",
        format!(
            "{}M - {}M",
            summary.budget_range.min, summary.budget_range.max
        ),
    );

    output::section("Healthy players by position");
    for (position, count) in &summary.positions {
        output::field(position.code(), count);
    }

    if !summary.can_field_lineup() {
        output::warning(&format!(
            "Only {} healthy players; a lineup needs 11",
            summary.healthy
        ));
    }

    if let Some(status) = lineup_status.filter(|s| *s != LineupStatus::Optimal) {
        output::warning(&format!("No default lineup to mark ({status})"));
    }

    if args.list {
        output::section("Players");
        let rows: Vec<PlayerRow> = listing
            .iter()
            .map(|entry| player_row(&entry.player, entry.in_lineup))
            .collect();
        output::lines(&Table::new(rows).to_string());
        let mut footer = format!("{} players", listing.len());
        if args.mark_xi {
            footer.push_str(" | ⭐ = in the starting XI");
        }
        output::note(&footer);
    }
    Ok(())
}

fn player_row(player: &Player, in_lineup: bool) -> PlayerRow {
    PlayerRow {
        marker: if in_lineup { "⭐" } else { "" },
        name: player.name.clone(),
        position: player.sub_position.to_string(),
        rating: format!("{:.0}", player.rating),
        price: player.price.to_string(),
        form: format!("{:.1}", player.form),
        offense: format!("{:.0}", player.offense_power),
        defense: format!("{:.0}", player.defense_power),
        fitness: if player.is_available() { "ok" } else { "injured" },
    }
}

/// The eleven `optimize` picks when every option is left at its default.
///
/// An unfillable squad marks nobody; the status says why.
fn default_xi(
    config: &Config,
    players: &[Player],
    team: &str,
) -> Result<(BTreeSet<PlayerId>, Option<LineupStatus>)> {
    let pool = team_pool(players, team)?;
    if pool.len() < LINEUP_SIZE {
        return Ok((BTreeSet::new(), Some(LineupStatus::Infeasible)));
    }

    let registry = config.formation_registry()?;
    let formation = registry.get(&config.optimizer.formation)?;
    let budget = BudgetRange::for_team(players, team).max;
    let optimizer = config.optimizer(Arc::new(HiGHSSolver::new()))?;
    debug!(team, formation = %formation.name, %budget, "solving default lineup for marking");

    let solution = optimizer.solve(
        &pool,
        formation,
        budget,
        config.optimizer.strategy,
        config.optimizer.allow_flexible,
    )?;
    let ids = solution.players().map(|p| p.id.clone()).collect();
    Ok((ids, Some(solution.status)))
}
