//! 0/1 assignment model over eligible (player, slot-group) pairs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::{
    Constraint, ConstraintSense, Formation, LineupSolution, Player, SlotAssignment, SubPosition,
    VariableBounds,
};
use crate::port::{IlpProblem, LpProblem};

/// One binary decision variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    /// Index into [`LineupModel::players`].
    pub player: usize,
    /// Index into [`LineupModel::groups`].
    pub group: usize,
    pub coefficient: f64,
}

/// The formulation shared by every tie-break stage.
///
/// Players are held in ascending id order and candidates are laid out player
/// by player, groups in formation order. Stage-specific objectives and locks
/// are layered on top of [`LineupModel::base`].
#[derive(Debug)]
pub(crate) struct LineupModel<'a> {
    pub players: Vec<&'a Player>,
    pub groups: Vec<(SubPosition, usize)>,
    pub candidates: Vec<Candidate>,
    base: LpProblem,
}

impl<'a> LineupModel<'a> {
    /// Build the model from already-scored candidates.
    ///
    /// `candidates` must reference `players` and `groups` by index.
    pub fn new(
        players: Vec<&'a Player>,
        formation: &Formation,
        candidates: Vec<Candidate>,
        budget: Decimal,
    ) -> Self {
        let groups: Vec<(SubPosition, usize)> = formation.groups().collect();
        let n = candidates.len();
        let mut base = LpProblem::new(n);

        // Every slot-group is filled exactly.
        for (g, (_, required)) in groups.iter().enumerate() {
            let vars = Self::indices(&candidates, |c| c.group == g);
            base.constraints
                .push(Constraint::indicator(n, &vars, ConstraintSense::Equal, *required as f64));
        }

        // No player is booked twice.
        for p in 0..players.len() {
            let vars = Self::indices(&candidates, |c| c.player == p);
            if vars.len() > 1 {
                base.constraints
                    .push(Constraint::indicator(n, &vars, ConstraintSense::LessEqual, 1.0));
            }
        }

        let mut model = Self {
            players,
            groups,
            candidates,
            base,
        };
        let costs = model.cost_row();
        model
            .base
            .constraints
            .push(Constraint::leq(costs, budget.to_f64().unwrap_or(f64::MAX)));
        model
    }

    fn indices(candidates: &[Candidate], keep: impl Fn(&Candidate) -> bool) -> Vec<usize> {
        candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| keep(c))
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.candidates.len()
    }

    /// Objective coefficient per variable.
    #[must_use]
    pub fn score_row(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.coefficient).collect()
    }

    /// Player price per variable.
    #[must_use]
    pub fn cost_row(&self) -> Vec<f64> {
        self.candidates
            .iter()
            .map(|c| self.players[c.player].price.to_f64().unwrap_or(0.0))
            .collect()
    }

    /// Variables belonging to one player, in formation order.
    #[must_use]
    pub fn player_vars(&self, player: usize) -> Vec<usize> {
        Self::indices(&self.candidates, |c| c.player == player)
    }

    /// Whether `values` places the player anywhere.
    #[must_use]
    pub fn is_selected(&self, values: &[f64], player: usize) -> bool {
        self.player_vars(player)
            .into_iter()
            .any(|v| values.get(v).is_some_and(|x| *x > 0.5))
    }

    /// A minimization problem over the base constraints plus `locks`.
    #[must_use]
    pub fn problem(
        &self,
        objective: Vec<f64>,
        locks: &[Constraint],
        bounds: &[VariableBounds],
    ) -> IlpProblem {
        let mut lp = self.base.clone();
        lp.objective = objective;
        lp.constraints.extend_from_slice(locks);
        let mut problem = IlpProblem::all_binary(lp);
        if bounds.len() == problem.lp.bounds.len() {
            problem.lp.bounds = bounds.to_vec();
        }
        problem
    }

    /// Turn a 0/1 vector into a lineup in formation order.
    ///
    /// Within a slot-group players are numbered by ascending id.
    #[must_use]
    pub fn decode(&self, values: &[f64]) -> LineupSolution {
        let mut assignments = Vec::with_capacity(crate::domain::LINEUP_SIZE);
        for (g, (slot, _)) in self.groups.iter().enumerate() {
            let chosen = self
                .candidates
                .iter()
                .enumerate()
                .filter(|(i, c)| c.group == g && values.get(*i).is_some_and(|x| *x > 0.5));
            for (index, (_, candidate)) in chosen.enumerate() {
                assignments.push(SlotAssignment {
                    slot: *slot,
                    slot_index: index + 1,
                    player: self.players[candidate.player].clone(),
                    score: candidate.coefficient,
                });
            }
        }
        LineupSolution::optimal(assignments)
    }
}
