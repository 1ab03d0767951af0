#![allow(non_snake_case)]

use crate::solver::SolutionStatus;
use crate::tableau::{Tableau, Var};
use crate::util::{EPS, ITER_WIDTH};

use log::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Drive the auxiliary variable to zero.
    One,
    /// Maximize the real objective over the feasible basis found by phase one.
    Two,
}

impl Phase {
    fn obj_row(self, tableau: &Tableau) -> usize {
        match self {
            Phase::One => tableau.aux_row(),
            Phase::Two => tableau.obj_row(),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::One => write!(f, "PHASE 1"),
            Phase::Two => write!(f, "PHASE 2"),
        }
    }
}

/// Pivots until the phase objective row has no negative entry, no leaving row
/// exists, or `max_iter` pivots have been made.
pub fn run_phase(tableau: &mut Tableau, phase: Phase, max_iter: u64) -> SolutionStatus {
    let x = phase.obj_row(tableau);

    info!("{}", phase);
    info!("Iteration  |  Objective");

    let mut iter = 1u64;

    loop {
        info!(
            "{:it$}  |  {:.8E}",
            iter,
            tableau.rhs(x),
            it = ITER_WIDTH
        );

        let s = match entering_column(tableau, x, phase) {
            Some(s) => s,
            None => {
                debug!("{} optimal after {} pivots", phase, iter - 1);
                return SolutionStatus::Optimal;
            }
        };

        let r = match leaving_row(tableau, s) {
            Some(r) => r,
            None => {
                debug!("{:?} can increase without limit", tableau.N[s]);
                return SolutionStatus::Unbounded;
            }
        };

        if iter > max_iter {
            debug!("reached max iterations");
            return SolutionStatus::MaxIter;
        }

        iter += 1;

        tableau.pivot(r, s);
        trace!("tableau:\n{}", tableau);
    }
}

/// Column with the most negative entry in objective row `x`.
///
/// Entries within `EPS` of each other are broken by the smaller non-basic
/// variable. This is not Bland's rule: only near-ties are broken by index, so
/// degenerate problems such as Beale's example can still cycle, and the
/// caller's `max_iter` is what stops them. Returns `None` once no entry is
/// below `-EPS`.
pub fn entering_column(tableau: &Tableau, x: usize, phase: Phase) -> Option<usize> {
    let D = &tableau.D;
    let N = &tableau.N;

    let s = (0..=tableau.cols())
        .filter(|&j| phase == Phase::One || N[j] != Var::Auxiliary)
        .fold(None, |best: Option<usize>, j| match best {
            Some(s)
                if !(D[(x, j)] < D[(x, s)]
                    || ((D[(x, j)] - D[(x, s)]).abs() < EPS && N[j] < N[s])) =>
            {
                Some(s)
            }
            _ => Some(j),
        })?;

    if D[(x, s)] > -EPS {
        None
    } else {
        Some(s)
    }
}

/// Row minimizing `rhs / D[i][s]` over rows with `D[i][s] > EPS`.
///
/// Ratios within `EPS` of each other are broken by the smaller basic
/// variable. Returns `None` when no row bounds column `s`.
pub fn leaving_row(tableau: &Tableau, s: usize) -> Option<usize> {
    let D = &tableau.D;
    let B = &tableau.B;
    let rhs = tableau.rhs_col();
    let ratio = |i: usize| D[(i, rhs)] / D[(i, s)];

    (0..tableau.rows())
        .filter(|&i| D[(i, s)] > EPS)
        .fold(None, |best: Option<usize>, i| match best {
            Some(r)
                if !(ratio(i) < ratio(r)
                    || ((ratio(i) - ratio(r)).abs() < EPS && B[i] < B[r])) =>
            {
                Some(r)
            }
            _ => Some(i),
        })
}
