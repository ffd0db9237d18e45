//! Handler for the `recommend` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::RecommendArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::dataset::{load_players, team_pool};
use crate::application::recommend::recommend;
use crate::error::Result;

#[derive(Tabled)]
struct RecommendationRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Pos")]
    position: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Score")]
    score: String,
}

/// Execute the recommend command.
pub fn execute(args: &RecommendArgs) -> Result<()> {
    let config = config::resolve(&args.config)?;
    let mut players = load_players(&args.players)?;
    if let Some(team) = &args.team {
        players = team_pool(&players, team)?;
    }
    let eligibility = config.eligibility_map()?;
    let scorer = config.scorer()?;

    let ranked = recommend(&players, args.position, &eligibility, &scorer, args.limit);

    if output::is_json() {
        output::json_output(json!({
            "command": "recommend",
            "position": args.position,
            "recommendations": ranked,
        }));
        return Ok(());
    }

    output::section(&format!("Best fits for {}", args.position));
    if ranked.is_empty() {
        output::note("No eligible players found");
        return Ok(());
    }

    let rows: Vec<RecommendationRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| RecommendationRow {
            rank: i + 1,
            name: r.player.name.clone(),
            team: r.player.team.clone(),
            position: r.player.sub_position.to_string(),
            price: r.player.price.to_string(),
            score: format!("{:.1}", r.score),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    let weights = scorer.weights_for(args.position);
    let stats: Vec<String> = weights
        .iter()
        .map(|(stat, w)| format!("{stat} {:.0}%", w * 100.0))
        .collect();
    output::hint(&format!("scored on {}", output::highlight(stats.join(", "))));
    Ok(())
}
