//! Solver port for linear and integer programming.
//!
//! Defines the trait the lineup engine formulates against. The engine builds
//! an [`IlpProblem`] over binary (player, slot-group) variables and hands it to
//! whichever backend implements [`Solver`].
//!
//! # Overview
//!
//! - [`Solver`]: Core LP/ILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Linear and integer programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, ...) and
/// provide a unified interface for optimization problems.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so that one optimizer
/// can serve concurrent requests. Observable behaviour must be deterministic:
/// identical problems yield identical solutions.
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve a linear programming problem.
    ///
    /// Minimizes the objective function `c * x` subject to the constraints.
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed problems (dimension mismatches).
    /// Infeasibility and solver faults are reported through
    /// [`LpSolution::status`].
    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution>;

    /// Solve an integer linear programming problem.
    ///
    /// Minimizes the objective function with integer constraints on specified
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed problems.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    /// Objective function coefficients.
    ///
    /// The solver minimizes `c^T * x` where `c` is this vector.
    pub objective: Vec<f64>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![0.0; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Check that every row and the bounds match the variable count.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let n = self.num_vars();
        self.bounds.len() == n && self.constraints.iter().all(|c| c.coefficients.len() == n)
    }
}

/// Integer linear programming problem definition.
///
/// Extends a linear programming problem with integer constraints on specified
/// variables.
#[derive(Debug, Clone, PartialEq)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    ///
    /// Variables not in this list are continuous (relaxed).
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP problem from an LP with specified integer variables.
    #[must_use]
    pub const fn new(lp: LpProblem, integer_vars: Vec<usize>) -> Self {
        Self { lp, integer_vars }
    }

    /// Create an ILP with all variables constrained to binary (0 or 1) values.
    #[must_use]
    pub fn all_binary(mut lp: LpProblem) -> Self {
        lp.bounds = vec![VariableBounds::binary(); lp.num_vars()];
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// Solution to a linear or integer programming problem.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Optimal values for each decision variable.
    pub values: Vec<f64>,

    /// Optimal objective function value.
    pub objective: f64,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Solution carrying only a non-optimal status.
    #[must_use]
    pub fn with_status(num_vars: usize, status: SolutionStatus) -> Self {
        Self {
            values: vec![0.0; num_vars],
            objective: 0.0,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// Solver encountered an internal error.
    Error,
}
