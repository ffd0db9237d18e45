//! Handler for the `optimize` command.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::adapter::inbound::cli::command::OptimizeArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::dataset::{load_players, team_pool};
use crate::adapter::solver::HiGHSSolver;
use crate::application::availability::check_formation_availability;
use crate::application::squad::BudgetRange;
use crate::domain::{DomainError, Formation, LineupSolution, LineupStatus, LINEUP_SIZE};
use crate::error::Result;

#[derive(Tabled)]
struct LineupRow {
    #[tabled(rename = "Slot")]
    slot: String,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Pos")]
    position: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Form")]
    form: String,
    #[tabled(rename = "Score")]
    score: String,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Players")]
    players: usize,
    #[tabled(rename = "Avg rating")]
    rating: String,
    #[tabled(rename = "Avg form")]
    form: String,
    #[tabled(rename = "Cost")]
    price: String,
    #[tabled(rename = "Score")]
    score: String,
}

/// Execute the optimize command.
pub fn execute(args: &OptimizeArgs) -> Result<()> {
    let config = config::resolve(&args.config)?;
    let players = load_players(&args.team.players)?;
    let pool = team_pool(&players, &args.team.team)?;
    if pool.len() < LINEUP_SIZE {
        return Err(DomainError::InsufficientPool {
            available: pool.len(),
            required: LINEUP_SIZE,
        }
        .into());
    }

    let registry = config.formation_registry()?;
    let formation_name = args
        .formation
        .as_deref()
        .unwrap_or(&config.optimizer.formation);
    let formation = registry.get(formation_name)?;
    let budget = args
        .budget
        .unwrap_or_else(|| BudgetRange::for_team(&players, &args.team.team).max);
    let strategy = args.strategy.unwrap_or(config.optimizer.strategy);
    let allow_flexible = config.optimizer.allow_flexible && !args.exact_positions;

    let optimizer = config.optimizer(Arc::new(HiGHSSolver::new()))?;
    let report = check_formation_availability(&pool, formation, optimizer.eligibility(), allow_flexible);
    debug!(
        team = %args.team.team,
        pool = pool.len(),
        formation = %formation.name,
        "running optimize"
    );

    let spinner = output::spinner(&format!("Solving {} for {}", formation.name, args.team.team));
    let solution = optimizer.solve(&pool, formation, budget, strategy, allow_flexible)?;
    if solution.is_optimal() {
        output::spinner_success(&spinner, "Lineup found");
    } else {
        output::spinner_fail(&spinner, &format!("No lineup: {}", solution.status));
    }

    if output::is_json() {
        let deficits: Vec<_> = report.deficits().collect();
        output::json_output(json!({
            "command": "optimize",
            "team": args.team.team,
            "formation": formation.name,
            "strategy": strategy,
            "budget": budget,
            "allow_flexible": allow_flexible,
            "status": solution.status,
            "total_score": solution.total_score,
            "total_cost": solution.total_cost,
            "remaining_budget": solution.remaining_budget(budget),
            "average_rating": solution.average_rating(),
            "average_form": solution.average_form(),
            "lineup": lineup_json(&solution),
            "groups": solution.group_stats(),
            "deficits": deficits,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Team", &args.team.team);
    output::field("Formation", format!("{} ({})", formation.name, formation.slot_summary()));
    output::field("Strategy", strategy);
    output::field("Budget", format!("{budget}M"));
    output::field("Flexible", if allow_flexible { "yes" } else { "no" });
    if output::verbosity() > 0 {
        output::field("Solver", optimizer.solver_name());
        output::field("Pool", pool.len());
    }

    for deficit in report.deficits() {
        output::warning(&format!(
            "{}: {} needed, {} available",
            deficit.position, deficit.required, deficit.available
        ));
    }

    match solution.status {
        LineupStatus::Optimal => print_lineup(&solution, formation, budget),
        LineupStatus::Infeasible => {
            output::warning("No lineup satisfies the formation and budget");
            output::hint("raise the budget, pick another formation or drop --exact-positions");
        }
        LineupStatus::Unbounded | LineupStatus::Error => {
            output::error(&format!("Solver failed ({})", solution.status));
        }
    }
    Ok(())
}

fn lineup_json(solution: &LineupSolution) -> serde_json::Value {
    solution
        .assignments
        .iter()
        .map(|a| {
            json!({
                "slot": a.slot,
                "slot_index": a.slot_index,
                "id": a.player.id,
                "name": a.player.name,
                "sub_position": a.player.sub_position,
                "price": a.player.price,
                "rating": a.player.rating,
                "form": a.player.form,
                "score": a.score,
                "off_position": a.is_off_position(),
            })
        })
        .collect()
}

fn print_lineup(solution: &LineupSolution, formation: &Formation, budget: Decimal) {
    let rows: Vec<LineupRow> = solution
        .assignments
        .iter()
        .map(|a| LineupRow {
            slot: a.slot_label(formation.required(a.slot)),
            name: a.player.name.clone(),
            position: if a.is_off_position() {
                format!("{}*", a.player.sub_position)
            } else {
                a.player.sub_position.to_string()
            },
            price: format!("{}", a.player.price),
            rating: format!("{:.0}", a.player.rating),
            form: format!("{:.1}", a.player.form),
            score: format!("{:.2}", a.score),
        })
        .collect();

    output::section("Starting XI");
    output::lines(&Table::new(rows).to_string());
    if solution.assignments.iter().any(|a| a.is_off_position()) {
        output::note("* playing outside their own position");
    }

    let groups: Vec<GroupRow> = solution
        .group_stats()
        .into_iter()
        .map(|g| GroupRow {
            group: g.group.to_string(),
            players: g.players,
            rating: format!("{:.1}", g.average_rating),
            form: format!("{:.2}", g.average_form),
            price: format!("{}M", g.total_price),
            score: format!("{:.2}", g.total_score),
        })
        .collect();
    output::section("By position group");
    output::lines(&Table::new(groups).to_string());

    output::section("Summary");
    output::field("Score", format!("{:.2}", solution.total_score));
    output::field("Cost", format!("{}M", solution.total_cost));
    output::field("Remaining", output::positive(format!("{}M", solution.remaining_budget(budget))));
    output::field("Avg rating", format!("{:.1}", solution.average_rating()));
    output::field("Avg form", format!("{:.2}", solution.average_form()));
}
