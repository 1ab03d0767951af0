use super::phase::{run_phase, Phase};
use crate::problem::Problem;
use crate::solver::{EqlpResult, Solution, SolutionStatus, SolverResult};
use crate::standard_form::StandardForm;
use crate::tableau::Tableau;
use crate::util::EPS;

use log::{debug, info, trace, warn};

pub const DEFAULT_MAX_ITER: u64 = 100_000;

/// Two-phase dense tableau simplex for `maximize c·x, A x = b, x ≥ 0`.
pub struct TableauSimplexSolver {
    max_iter: u64,
}

impl std::default::Default for TableauSimplexSolver {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl TableauSimplexSolver {
    /// `max_iter` caps the pivots of each phase, `None` removes the cap.
    pub fn new(max_iter: Option<u64>) -> Self {
        Self {
            max_iter: max_iter.unwrap_or(u64::MAX),
        }
    }

    pub fn max_iter(&self) -> u64 {
        self.max_iter
    }

    pub fn solve(&self, prob: &Problem) -> EqlpResult {
        let std_form: StandardForm = prob.into();
        let mut tableau = Tableau::from(&std_form);

        info!(
            "solving problem with {} variables and {} constraints",
            prob.vars().len(),
            prob.constraints().len()
        );

        trace!("c: {}", std_form.c);
        trace!("A: {}", std_form.A);
        trace!("b: {}", std_form.b);

        if let Some(result) = self.restore_feasibility(&mut tableau) {
            return Ok(result);
        }

        Ok(match run_phase(&mut tableau, Phase::Two, self.max_iter) {
            SolutionStatus::Optimal => {
                let x = tableau.primal_solution();
                let obj = tableau.obj();

                info!("found optimal point with objective value {}", obj);
                debug!("x: {}", x);

                SolverResult::Optimal(Solution::new(obj, x))
            }

            SolutionStatus::Unbounded => {
                info!("problem is unbounded");
                SolverResult::Unbounded
            }

            SolutionStatus::MaxIter => {
                info!("reached maximum iterations");
                SolverResult::MaxIter { obj: tableau.obj() }
            }
        })
    }

    /// Makes the basis of `tableau` feasible. Returns the final result when the
    /// problem turns out infeasible or phase one runs out of iterations.
    fn restore_feasibility(&self, tableau: &mut Tableau) -> Option<SolverResult> {
        let rhs_col = tableau.rhs_col();

        let r = (0..tableau.rows()).fold(None, |best: Option<usize>, i| match best {
            Some(r) if tableau.entry(i, rhs_col) >= tableau.entry(r, rhs_col) => Some(r),
            _ => Some(i),
        });

        let r = match r {
            Some(r) if tableau.rhs(r) < -EPS => r,
            _ => {
                debug!("initial basis is feasible, skipping phase 1");
                return None;
            }
        };

        debug!(
            "row {} has the most negative rhs {}, pivoting in the auxiliary variable",
            r,
            tableau.rhs(r)
        );

        let aux_col = tableau.aux_col();
        tableau.pivot(r, aux_col);

        match run_phase(tableau, Phase::One, self.max_iter) {
            SolutionStatus::Optimal => (),

            SolutionStatus::Unbounded => {
                warn!("phase 1 reported unbounded, treating the problem as infeasible");
                return Some(SolverResult::Infeasible);
            }

            SolutionStatus::MaxIter => {
                info!("reached maximum iterations");
                return Some(SolverResult::MaxIter {
                    obj: f64::NEG_INFINITY,
                });
            }
        }

        let aux_obj = tableau.aux_obj();

        if aux_obj.abs() > EPS {
            info!("problem is infeasible, auxiliary objective {}", aux_obj);
            return Some(SolverResult::Infeasible);
        }

        info!("found feasible point");
        drive_out_auxiliary(tableau);

        None
    }
}

/// Pivots a basic auxiliary variable out of the basis. Its row has a zero rhs
/// once phase 1 reaches a zero auxiliary objective, so the pivot keeps every
/// rhs as it is.
///
/// Every row of the system carries its own slack, so the auxiliary variable
/// can take any value on the solution set of the equalities. Its row thus
/// always has a non-zero entry, and the largest one is used as the pivot.
fn drive_out_auxiliary(tableau: &mut Tableau) {
    let r = match tableau.aux_basic_row() {
        Some(r) => r,
        None => return,
    };

    let s = (0..tableau.rhs_col()).fold(0, |best, j| {
        if tableau.entry(r, j).abs() > tableau.entry(r, best).abs() {
            j
        } else {
            best
        }
    });

    debug!("driving the auxiliary variable out of row {}", r);
    tableau.pivot(r, s);
}
