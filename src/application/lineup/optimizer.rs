//! The lineup optimization engine.
//!
//! Solves the assignment of players to formation slots as a 0/1 ILP and then
//! narrows the optimal face down to one answer with explicit tie-break stages,
//! since the backend's choice among equal optima is unspecified:
//!
//! 1. maximize the strategy-weighted score;
//! 2. holding the score, minimize total cost;
//! 3. holding both, greedily admit players by ascending id, screening each
//!    trial with its LP relaxation before paying for a MIP solve;
//! 4. with the eleven fixed, pin each player to the first feasible slot-group
//!    in formation order, again by ascending id.
//!
//! Every stage starts from the previous stage's incumbent, so a stage that
//! cannot improve it never discards a feasible lineup.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use super::model::{Candidate, LineupModel};
use super::penalty::OffPositionPenalty;
use crate::application::availability::check_formation_availability;
use crate::application::suitability::SuitabilityScorer;
use crate::domain::{
    Constraint, ConstraintSense, DomainError, EligibilityMap, Formation, LineupSolution,
    LineupStatus, Player, Strategy, StrategyWeights, SubPosition, VariableBounds, LINEUP_SIZE,
};
use crate::port::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Default relative tolerance for locking the score and cost optima.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Immutable tables plus a solver backend.
///
/// Holds no per-call state, so one optimizer can serve concurrent callers.
#[derive(Clone)]
pub struct LineupOptimizer {
    solver: Arc<dyn Solver>,
    eligibility: EligibilityMap,
    strategies: StrategyWeights,
    scorer: SuitabilityScorer,
    penalty: OffPositionPenalty,
    tolerance: f64,
}

impl std::fmt::Debug for LineupOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineupOptimizer")
            .field("solver", &self.solver.name())
            .field("penalty", &self.penalty)
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl LineupOptimizer {
    /// Optimizer with the built-in tables.
    #[must_use]
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self {
            solver,
            eligibility: EligibilityMap::default(),
            strategies: StrategyWeights::default(),
            scorer: SuitabilityScorer::default(),
            penalty: OffPositionPenalty::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    #[must_use]
    pub fn with_eligibility(mut self, eligibility: EligibilityMap) -> Self {
        self.eligibility = eligibility;
        self
    }

    #[must_use]
    pub fn with_strategies(mut self, strategies: StrategyWeights) -> Self {
        self.strategies = strategies;
        self
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: SuitabilityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, penalty: OffPositionPenalty) -> Self {
        self.penalty = penalty;
        self
    }

    /// Relative tolerance used when locking the score and cost optima.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn eligibility(&self) -> &EligibilityMap {
        &self.eligibility
    }

    #[must_use]
    pub fn scorer(&self) -> &SuitabilityScorer {
        &self.scorer
    }

    #[must_use]
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// Pick the best eleven from `pool` for `formation` within `budget`.
    ///
    /// The pool is expected to be one team's available players; it is not
    /// re-filtered here. Structural infeasibility is reported through
    /// [`LineupStatus::Infeasible`] and solver faults through
    /// [`LineupStatus::Error`].
    ///
    /// # Errors
    ///
    /// Fails fast with a [`DomainError`] when the pool holds fewer than eleven
    /// players or a duplicate id, a player is invalid, the budget is negative,
    /// or the formation does not have exactly eleven slots.
    pub fn solve(
        &self,
        pool: &[Player],
        formation: &Formation,
        budget: Decimal,
        strategy: Strategy,
        allow_flexible: bool,
    ) -> Result<LineupSolution, DomainError> {
        validate_inputs(pool, formation, budget)?;

        let report = check_formation_availability(pool, formation, &self.eligibility, allow_flexible);
        if !report.sufficient() {
            for deficit in report.deficits() {
                info!(
                    formation = %formation.name,
                    position = %deficit.position,
                    required = deficit.required,
                    available = deficit.available,
                    "slot-group short of players"
                );
            }
            return Ok(LineupSolution::infeasible());
        }

        let model = self.build_model(pool, formation, budget, strategy, allow_flexible);
        debug!(
            formation = %formation.name,
            %strategy,
            %budget,
            allow_flexible,
            players = model.players.len(),
            variables = model.num_vars(),
            solver = self.solver.name(),
            "solving lineup"
        );

        let solution = match self.tie_broken(&model) {
            Ok(values) => model.decode(&values),
            Err(status) => return Ok(LineupSolution::empty(status)),
        };

        if let Err(reason) = verify(&solution, formation, budget, &self.eligibility, allow_flexible) {
            error!(formation = %formation.name, %reason, "lineup failed post-solve verification");
            return Ok(LineupSolution::empty(LineupStatus::Error));
        }

        info!(
            formation = %formation.name,
            %strategy,
            score = solution.total_score,
            cost = %solution.total_cost,
            "lineup found"
        );
        Ok(solution)
    }

    fn build_model<'a>(
        &self,
        pool: &'a [Player],
        formation: &Formation,
        budget: Decimal,
        strategy: Strategy,
        allow_flexible: bool,
    ) -> LineupModel<'a> {
        let mut players: Vec<&Player> = pool.iter().collect();
        players.sort_by(|a, b| a.id.cmp(&b.id));

        // Suitability is scored once per position across the whole pool.
        let mut suitability: BTreeMap<SubPosition, Vec<f64>> = BTreeMap::new();
        let mut score_at = |p: usize, position: SubPosition| {
            suitability
                .entry(position)
                .or_insert_with(|| self.scorer.score_batch(&players, position))
                .get(p)
                .copied()
                .unwrap_or(0.0)
        };

        let mut candidates = Vec::new();
        for (p, player) in players.iter().enumerate() {
            let weight = self.strategies.selection_weight(strategy, player);
            for (g, (slot, _)) in formation.groups().enumerate() {
                let coefficient = if player.sub_position == slot {
                    weight
                } else if allow_flexible && self.eligibility.is_flexible(player.sub_position, slot) {
                    let native = score_at(p, player.sub_position);
                    let at_slot = score_at(p, slot);
                    self.penalty.coefficient(weight, native, at_slot)
                } else {
                    continue;
                };
                candidates.push(Candidate {
                    player: p,
                    group: g,
                    coefficient,
                });
            }
        }

        LineupModel::new(players, formation, candidates, budget)
    }

    /// Run the four stages and return the final 0/1 vector.
    ///
    /// Only an infeasible trial is skipped; any other non-optimal outcome
    /// aborts the whole solve with that status.
    fn tie_broken(&self, model: &LineupModel<'_>) -> Result<Vec<f64>, LineupStatus> {
        let n = model.num_vars();
        let score_row = model.score_row();
        let cost_row = model.cost_row();

        // Stage 1: best score.
        let negated: Vec<f64> = score_row.iter().map(|c| -c).collect();
        let first = self.run(&model.problem(negated, &[], &[]))?;
        let best = -first.objective;
        let mut incumbent = first.values;

        let mut locks = vec![Constraint::geq(score_row, best - self.slack(best))];

        // Stage 2: cheapest among the best.
        let cost = match self.run(&model.problem(cost_row.clone(), &locks, &[])) {
            Ok(solution) => {
                incumbent = solution.values;
                solution.objective
            }
            Err(LineupStatus::Infeasible) => {
                warn!("cost tie-break found no lineup at the best score; keeping best-score lineup");
                cost_row.iter().zip(&incumbent).map(|(c, x)| c * x).sum()
            }
            Err(status) => return Err(status),
        };
        locks.push(Constraint::leq(cost_row.clone(), cost + self.slack(cost)));

        // Stage 3: lexicographically smallest id set.
        let mut chosen = BTreeSet::new();
        let mut screened = 0usize;
        for p in 0..model.players.len() {
            if chosen.len() == LINEUP_SIZE {
                break;
            }
            locks.push(Constraint::indicator(n, &model.player_vars(p), ConstraintSense::Equal, 1.0));
            if model.is_selected(&incumbent, p) {
                chosen.insert(p);
                continue;
            }
            let trial = model.problem(cost_row.clone(), &locks, &[]);
            // An infeasible relaxation rules the player out without a MIP solve.
            if !self.relaxation_feasible(&trial)? {
                screened += 1;
                locks.pop();
                continue;
            }
            match self.run(&trial) {
                Ok(solution) => {
                    incumbent = solution.values;
                    chosen.insert(p);
                }
                Err(LineupStatus::Infeasible) => {
                    locks.pop();
                }
                Err(status) => return Err(status),
            }
        }
        debug!(players = chosen.len(), screened, "lineup members fixed");

        // Stage 4: earliest feasible slot-group per player.
        let mut bounds = vec![VariableBounds::binary(); n];
        for (v, candidate) in model.candidates.iter().enumerate() {
            if !chosen.contains(&candidate.player) {
                bounds[v] = VariableBounds::fixed(0.0);
            }
        }
        for &p in &chosen {
            for v in model.player_vars(p) {
                if incumbent.get(v).is_some_and(|x| *x > 0.5) {
                    bounds[v] = VariableBounds::fixed(1.0);
                    break;
                }
                let mut trial = bounds.clone();
                trial[v] = VariableBounds::fixed(1.0);
                match self.run(&model.problem(cost_row.clone(), &locks, &trial)) {
                    Ok(solution) => {
                        incumbent = solution.values;
                        bounds = trial;
                        break;
                    }
                    Err(LineupStatus::Infeasible) => {}
                    Err(status) => return Err(status),
                }
            }
        }

        Ok(incumbent)
    }

    /// Solve one stage, mapping every non-optimal outcome to a lineup status.
    fn run(&self, problem: &IlpProblem) -> Result<LpSolution, LineupStatus> {
        self.outcome(self.solver.solve_ilp(problem))
    }

    /// Whether the LP relaxation of `problem` has any feasible point.
    fn relaxation_feasible(&self, problem: &IlpProblem) -> Result<bool, LineupStatus> {
        match self.outcome(self.solver.solve_lp(&problem.lp)) {
            Ok(_) => Ok(true),
            Err(LineupStatus::Infeasible) => Ok(false),
            Err(status) => Err(status),
        }
    }

    fn outcome(&self, result: crate::error::Result<LpSolution>) -> Result<LpSolution, LineupStatus> {
        match result {
            Ok(solution) => match solution.status {
                SolutionStatus::Optimal => Ok(solution),
                SolutionStatus::Infeasible => Err(LineupStatus::Infeasible),
                SolutionStatus::Unbounded => {
                    error!(solver = self.solver.name(), "solver reported an unbounded lineup model");
                    Err(LineupStatus::Unbounded)
                }
                SolutionStatus::Error => {
                    error!(solver = self.solver.name(), "solver failed");
                    Err(LineupStatus::Error)
                }
            },
            Err(e) => {
                error!(solver = self.solver.name(), error = %e, "solver rejected the lineup model");
                Err(LineupStatus::Error)
            }
        }
    }

    fn slack(&self, value: f64) -> f64 {
        self.tolerance * value.abs().max(1.0)
    }
}

fn validate_inputs(pool: &[Player], formation: &Formation, budget: Decimal) -> Result<(), DomainError> {
    if pool.len() < LINEUP_SIZE {
        return Err(DomainError::InsufficientPool {
            available: pool.len(),
            required: LINEUP_SIZE,
        });
    }
    if budget < Decimal::ZERO {
        return Err(DomainError::NegativeBudget { budget });
    }
    formation.validate()?;

    let mut seen = BTreeSet::new();
    for player in pool {
        player.validate()?;
        if !seen.insert(&player.id) {
            return Err(DomainError::DuplicatePlayer {
                id: player.id.clone(),
            });
        }
    }
    Ok(())
}

/// Re-check a decoded lineup against the hard constraints, exactly.
fn verify(
    solution: &LineupSolution,
    formation: &Formation,
    budget: Decimal,
    eligibility: &EligibilityMap,
    allow_flexible: bool,
) -> Result<(), String> {
    if solution.total_cost > budget {
        return Err(format!("cost {} exceeds budget {budget}", solution.total_cost));
    }
    if solution.assignments.len() != LINEUP_SIZE {
        return Err(format!("{} players selected", solution.assignments.len()));
    }
    let distinct: BTreeSet<_> = solution.players().map(|p| &p.id).collect();
    if distinct.len() != LINEUP_SIZE {
        return Err("a player fills more than one slot".to_string());
    }
    for (slot, required) in formation.groups() {
        let filled = solution.assignments.iter().filter(|a| a.slot == slot).count();
        if filled != required {
            return Err(format!("{slot} has {filled} of {required} slots filled"));
        }
    }
    if let Some(bad) = solution
        .assignments
        .iter()
        .find(|a| !eligibility.is_eligible(a.player.sub_position, a.slot, allow_flexible))
    {
        return Err(format!("{} is not eligible for {}", bad.player.id, bad.slot));
    }
    Ok(())
}
