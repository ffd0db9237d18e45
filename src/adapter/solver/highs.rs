//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use good_lp::SolutionStatus as HighsStatus;
use tracing::{debug, warn};

use crate::domain::constraint::ConstraintSense;
use crate::error::{Error, Result};
use crate::port::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};

/// Absolute MIP gap. Lineup scores differing by less than this are ties.
const MIP_ABS_GAP: f64 = 1e-9;

/// HiGHS-based LP/ILP solver.
///
/// MIP solves run with a zero relative gap: HiGHS' default of `1e-4` would
/// otherwise stop on an incumbent that is not the true optimum and still
/// report it as solved.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
        solve_with_good_lp(problem, &[])
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        solve_with_good_lp(&problem.lp, &problem.integer_vars)
    }
}

/// Sum of `coeff * var` over the non-zero coefficients.
fn linear_expression(vars: &[Variable], coefficients: &[f64]) -> Expression {
    vars.iter()
        .zip(coefficients)
        .filter(|(_, c)| **c != 0.0)
        .map(|(v, c)| *c * *v)
        .sum()
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &LpProblem, integer_vars: &[usize]) -> Result<LpSolution> {
    if !problem.is_well_formed() {
        return Err(Error::Solver(format!(
            "problem dimensions disagree: {} variables, {} bounds",
            problem.num_vars(),
            problem.bounds.len()
        )));
    }

    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: 0.0,
            status: SolutionStatus::Optimal,
        });
    }

    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in problem.bounds.iter().enumerate() {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(lb);
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub);
        }
        if integer_vars.contains(&i) {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective = linear_expression(&var_list, &problem.objective);
    let mut model = vars
        .minimise(objective)
        .using(highs)
        .set_option("mip_rel_gap", 0.0)
        .set_option("mip_abs_gap", MIP_ABS_GAP);

    for constr in &problem.constraints {
        let lhs = linear_expression(&var_list, &constr.coefficients);
        let rhs = constr.rhs;

        model = match constr.sense {
            ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
            ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
            ConstraintSense::Equal => model.with(constraint!(lhs == rhs)),
        };
    }

    match model.solve() {
        Ok(solution) if !matches!(solution.status(), HighsStatus::Optimal) => {
            // A gap or time limit stop leaves an incumbent of unknown quality.
            let limit = match solution.status() {
                HighsStatus::TimeLimit => "time limit",
                _ => "gap limit",
            };
            warn!(vars = n, limit, "highs stopped before proving optimality");
            Ok(LpSolution::with_status(n, SolutionStatus::Error))
        }
        Ok(solution) => {
            let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();

            // Re-evaluate objective with the solved values
            let objective: f64 = values
                .iter()
                .zip(problem.objective.iter())
                .map(|(v, c)| v * c)
                .sum();

            Ok(LpSolution {
                values,
                objective,
                status: SolutionStatus::Optimal,
            })
        }
        Err(ResolutionError::Infeasible) => {
            debug!(vars = n, "highs reported infeasible");
            Ok(LpSolution::with_status(n, SolutionStatus::Infeasible))
        }
        Err(ResolutionError::Unbounded) => {
            warn!(vars = n, "highs reported unbounded");
            Ok(LpSolution::with_status(n, SolutionStatus::Unbounded))
        }
        Err(e) => {
            warn!(vars = n, error = %e, "highs failed");
            Ok(LpSolution::with_status(n, SolutionStatus::Error))
        }
    }
}
