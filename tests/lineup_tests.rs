//! Integration tests for the lineup optimizer against the HiGHS backend.

mod support;

use std::sync::Arc;

use rust_decimal_macros::dec;
use startingxi::adapter::outbound::dataset::team_pool;
use startingxi::adapter::solver::HiGHSSolver;
use startingxi::application::{LineupOptimizer, OffPositionPenalty};
use startingxi::domain::{
    EligibilityMap, LineupSolution, LineupStatus, Player, PlayerId, Strategy, SubPosition,
};
use support::squad::{deep_pool, exact_pool, formation, player, FOUR_THREE_THREE};

fn optimizer() -> LineupOptimizer {
    LineupOptimizer::new(Arc::new(HiGHSSolver::new()))
}

/// The assignment filling the single right-back slot.
fn right_back(solution: &LineupSolution) -> (&str, f64) {
    let assignment = solution
        .assignments
        .iter()
        .find(|a| a.slot == SubPosition::RB)
        .expect("right-back slot filled");
    (assignment.player.id.as_str(), assignment.score)
}

/// 4-3-3 exact pool with the right-back replaced by `cover`.
fn pool_with_right_back(cover: Player) -> Vec<Player> {
    let mut pool = exact_pool(&FOUR_THREE_THREE);
    pool[3] = cover;
    pool
}

fn sorted_ids(ids: Vec<PlayerId>) -> Vec<PlayerId> {
    let mut ids = ids;
    ids.sort();
    ids
}

#[test]
fn exact_pool_within_budget_is_optimal() {
    let pool = exact_pool(&FOUR_THREE_THREE);
    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(110), Strategy::Balanced, false)
        .unwrap();

    assert_eq!(solution.status, LineupStatus::Optimal);
    assert_eq!(solution.assignments.len(), 11);
    assert_eq!(solution.total_cost, dec!(110));
    assert_eq!(solution.remaining_budget(dec!(110)), dec!(0));
    assert!(solution.assignments.iter().all(|a| !a.is_off_position()));
}

#[test]
fn exact_pool_one_unit_short_is_infeasible() {
    let pool = exact_pool(&FOUR_THREE_THREE);
    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(109), Strategy::Balanced, false)
        .unwrap();

    assert_eq!(solution.status, LineupStatus::Infeasible);
    assert!(solution.assignments.is_empty());
}

#[test]
fn centre_back_covers_right_back_only_when_flexible() {
    use SubPosition::*;
    let pool = exact_pool(&[GK, CB, CB, CB, LB, CM, CM, CAM, LW, RW, ST]);
    let optimizer = optimizer().with_eligibility(EligibilityMap::from_entries([(RB, vec![CB])]));

    let strict = optimizer
        .solve(&pool, &formation("4-3-3"), dec!(200), Strategy::Balanced, false)
        .unwrap();
    assert_eq!(strict.status, LineupStatus::Infeasible);

    let flexible = optimizer
        .solve(&pool, &formation("4-3-3"), dec!(200), Strategy::Balanced, true)
        .unwrap();
    assert_eq!(flexible.status, LineupStatus::Optimal);
    let right_back: Vec<_> = flexible.assignments.iter().filter(|a| a.slot == RB).collect();
    assert_eq!(right_back.len(), 1);
    assert_eq!(right_back[0].player.sub_position, CB);
    assert!(right_back[0].is_off_position());
}

#[test]
fn default_map_never_puts_centre_back_at_right_back() {
    use SubPosition::*;
    let pool = exact_pool(&[GK, CB, CB, CB, LB, CM, CM, CAM, LW, RW, ST]);
    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(200), Strategy::Balanced, true)
        .unwrap();
    assert_eq!(solution.status, LineupStatus::Infeasible);
}

#[test]
fn every_slot_filled_once_by_an_eligible_player() {
    use SubPosition::*;
    let mut pool = deep_pool();
    pool.push(player("x01", RM, dec!(6), 90.0));
    pool.push(player("x02", DM, dec!(6), 90.0));
    let eligibility = EligibilityMap::default();
    let shape = formation("4-3-3");

    let solution = optimizer()
        .solve(&pool, &shape, dec!(120), Strategy::Offensive, true)
        .unwrap();
    assert_eq!(solution.status, LineupStatus::Optimal);
    assert_eq!(solution.assignments.len(), 11);

    let ids = solution.player_ids();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 11);

    for (position, count) in shape.groups() {
        let filled = solution.assignments.iter().filter(|a| a.slot == position).count();
        assert_eq!(filled, count, "slot-group {position}");
    }
    for assignment in &solution.assignments {
        assert!(eligibility.is_eligible(assignment.player.sub_position, assignment.slot, true));
    }
    assert!(solution.total_cost <= dec!(120));
}

#[test]
fn raising_the_budget_never_lowers_the_score() {
    let pool = deep_pool();
    let shape = formation("4-3-3");
    let optimizer = optimizer();

    let below = optimizer
        .solve(&pool, &shape, dec!(54.99), Strategy::Balanced, false)
        .unwrap();
    assert_eq!(below.status, LineupStatus::Infeasible);

    let mut previous = f64::NEG_INFINITY;
    for budget in [dec!(55), dec!(70), dec!(95), dec!(120), dec!(165), dec!(500)] {
        let solution = optimizer
            .solve(&pool, &shape, budget, Strategy::Balanced, false)
            .unwrap();
        assert_eq!(solution.status, LineupStatus::Optimal, "budget {budget}");
        assert!(solution.total_cost <= budget);
        assert!(
            solution.total_score + 1e-6 >= previous,
            "score fell from {previous} to {} at budget {budget}",
            solution.total_score
        );
        previous = solution.total_score;
    }
    assert!((previous - 880.0).abs() < 1e-6);
}

#[test]
fn fractional_prices_fit_an_exact_budget() {
    let pool: Vec<_> = FOUR_THREE_THREE
        .iter()
        .enumerate()
        .map(|(i, pos)| player(&format!("p{:02}", i + 1), *pos, dec!(9.3), 50.0))
        .collect();
    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(102.3), Strategy::Balanced, false)
        .unwrap();
    assert_eq!(solution.status, LineupStatus::Optimal);
    assert_eq!(solution.total_cost, dec!(102.3));
}

#[test]
fn identical_inputs_give_identical_lineups() {
    let mut pool = deep_pool();
    pool.push(player("t01", SubPosition::ST, dec!(15), 80.0));
    pool.push(player("t02", SubPosition::CB, dec!(15), 80.0));
    let shape = formation("4-3-3");
    let optimizer = optimizer();

    let first = optimizer
        .solve(&pool, &shape, dec!(100), Strategy::Defensive, false)
        .unwrap();
    let second = optimizer
        .solve(&pool, &shape, dec!(100), Strategy::Defensive, false)
        .unwrap();
    assert_eq!(first, second);

    let mut reversed = pool.clone();
    reversed.reverse();
    let third = optimizer
        .solve(&reversed, &shape, dec!(100), Strategy::Defensive, false)
        .unwrap();
    assert_eq!(sorted_ids(first.player_ids()), sorted_ids(third.player_ids()));
    assert_eq!(first.total_cost, third.total_cost);
}

#[test]
fn injured_players_drop_out_of_the_team_pool() {
    let mut players = deep_pool();
    players[0] = players[0].clone().injured();
    let pool = team_pool(&players, "Home").unwrap();
    assert_eq!(pool.len(), players.len() - 1);

    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(500), Strategy::Balanced, false)
        .unwrap();
    assert_eq!(solution.status, LineupStatus::Optimal);
    assert!(!solution.player_ids().contains(&PlayerId::from("s01")));
    assert!(solution.player_ids().contains(&PlayerId::from("c01")));
}

#[test]
fn optimizer_does_not_mutate_the_pool() {
    let pool = deep_pool();
    let snapshot = pool.clone();
    let _ = optimizer()
        .solve(&pool, &formation("4-4-2"), dec!(100), Strategy::Balanced, true)
        .unwrap();
    assert_eq!(pool, snapshot);
}

#[test]
fn near_tied_lineups_resolve_to_the_higher_score() {
    // 0.002 better out of 550: inside a 1e-4 relative MIP gap.
    let mut pool = exact_pool(&FOUR_THREE_THREE);
    pool.push(player("p12", SubPosition::ST, dec!(10), 50.002));
    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(200), Strategy::Balanced, false)
        .unwrap();

    assert_eq!(solution.status, LineupStatus::Optimal);
    let ids = solution.player_ids();
    assert!(ids.contains(&PlayerId::from("p12")));
    assert!(!ids.contains(&PlayerId::from("p11")));
    assert!((solution.total_score - 550.002).abs() < 1e-6);
}

#[test]
fn native_beats_equally_strong_cover_player() {
    // a01 sorts first, so only the penalty keeps it out of the right-back slot.
    let mut pool = exact_pool(&FOUR_THREE_THREE);
    pool.push(player("a01", SubPosition::RM, dec!(10), 50.0));
    let solution = optimizer()
        .solve(&pool, &formation("4-3-3"), dec!(200), Strategy::Balanced, true)
        .unwrap();

    assert_eq!(solution.status, LineupStatus::Optimal);
    let (id, score) = right_back(&solution);
    assert_eq!(id, "p04");
    assert!((score - 50.0).abs() < 1e-9);
    assert!(!solution.player_ids().contains(&PlayerId::from("a01")));
}

#[test]
fn larger_suitability_gap_lowers_the_cover_score() {
    let shape = formation("4-3-3");
    let optimizer = optimizer();

    // No stats: no gap, only the flat 5% applies.
    let plain = optimizer
        .solve(
            &pool_with_right_back(player("p04", SubPosition::RM, dec!(10), 50.0)),
            &shape,
            dec!(200),
            Strategy::Balanced,
            true,
        )
        .unwrap();
    // Strong wide-midfield stats the right-back vector ignores: RM 35, RB 0.
    let gapped = optimizer
        .solve(
            &pool_with_right_back(
                player("p04", SubPosition::RM, dec!(10), 50.0)
                    .with_stat("dribbles", 5.0)
                    .with_stat("key_passes", 4.0),
            ),
            &shape,
            dec!(200),
            Strategy::Balanced,
            true,
        )
        .unwrap();

    let (plain_id, plain_score) = right_back(&plain);
    let (gapped_id, gapped_score) = right_back(&gapped);
    assert_eq!(plain_id, "p04");
    assert_eq!(gapped_id, "p04");
    assert!((plain_score - 47.5).abs() < 1e-9);
    // 50 * (1 - 0.05 - 0.25 * 35 / 100)
    assert!((gapped_score - 43.125).abs() < 1e-9);
    assert!(gapped.total_score < plain.total_score);
}

#[test]
fn without_a_penalty_the_smaller_id_takes_the_slot() {
    let mut pool = exact_pool(&FOUR_THREE_THREE);
    pool.push(player("a01", SubPosition::RM, dec!(10), 50.0));
    let solution = optimizer()
        .with_penalty(OffPositionPenalty::none())
        .solve(&pool, &formation("4-3-3"), dec!(200), Strategy::Balanced, true)
        .unwrap();

    assert_eq!(solution.status, LineupStatus::Optimal);
    let (id, score) = right_back(&solution);
    assert_eq!(id, "a01");
    assert!((score - 50.0).abs() < 1e-9);
    assert!(!solution.player_ids().contains(&PlayerId::from("p04")));
}
