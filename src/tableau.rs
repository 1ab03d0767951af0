#![allow(non_snake_case)]

use crate::standard_form::StandardForm;
use crate::util::EPS;

use log::trace;

/// Identifies a column of the full system: the auxiliary variable of the
/// feasibility phase, a decision variable of the problem, or the slack of an
/// inequality row.
///
/// The derived ordering puts the auxiliary variable first, then decision
/// variables by index, then slacks by row. Both ratio-test and entering
/// tie-breaks rely on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    Auxiliary,
    Decision(usize),
    Slack(usize),
}

/// Dense simplex dictionary.
///
/// With `n` inequality rows and `m` decision variables, `D` is
/// `(n + 2) × (m + 2)`. Row `i < n` reads
/// `B[i] = D[i][m + 1] − Σ_j D[i][j] · N[j]`, row `n` is the objective and
/// row `n + 1` the auxiliary (phase 1) objective, both written the same way.
/// Column `m` starts out holding the auxiliary variable and column `m + 1`
/// is the right-hand side.
#[derive(Debug, Clone)]
pub struct Tableau {
    pub(crate) D: nalgebra::DMatrix<f64>,
    pub(crate) B: Vec<Var>,
    pub(crate) N: Vec<Var>,
}

impl std::convert::From<&StandardForm> for Tableau {
    fn from(std_form: &StandardForm) -> Self {
        let rows = std_form.rows();
        let cols = std_form.cols();

        let mut D = nalgebra::DMatrix::zeros(rows + 2, cols + 2);

        D.view_mut((0, 0), (rows, cols)).copy_from(&std_form.A);

        let B = (0..rows).map(Var::Slack).collect();

        for i in 0..rows {
            D[(i, cols)] = -1.;
            D[(i, cols + 1)] = std_form.b[i];
        }

        let mut N: Vec<_> = (0..cols).map(Var::Decision).collect();
        N.push(Var::Auxiliary);

        for j in 0..cols {
            D[(rows, j)] = -std_form.c[j];
        }

        D[(rows + 1, cols)] = 1.;

        Self { D, B, N }
    }
}

impl Tableau {
    /// Number of inequality rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.B.len()
    }

    /// Number of decision variables.
    #[inline]
    pub fn cols(&self) -> usize {
        self.N.len() - 1
    }

    #[inline]
    pub fn obj_row(&self) -> usize {
        self.rows()
    }

    #[inline]
    pub fn aux_row(&self) -> usize {
        self.rows() + 1
    }

    #[inline]
    pub fn aux_col(&self) -> usize {
        self.cols()
    }

    #[inline]
    pub fn rhs_col(&self) -> usize {
        self.cols() + 1
    }

    #[inline]
    pub fn entry(&self, i: usize, j: usize) -> f64 {
        self.D[(i, j)]
    }

    #[inline]
    pub fn rhs(&self, i: usize) -> f64 {
        self.D[(i, self.rhs_col())]
    }

    pub fn basis(&self) -> &[Var] {
        &self.B
    }

    pub fn nonbasis(&self) -> &[Var] {
        &self.N
    }

    /// Current value of the real objective.
    pub fn obj(&self) -> f64 {
        self.rhs(self.obj_row())
    }

    /// Current value of the auxiliary objective, `−x_aux`.
    pub fn aux_obj(&self) -> f64 {
        self.rhs(self.aux_row())
    }

    /// Value of `var` in the current basic solution; non-basic variables are zero.
    #[cfg(test)]
    pub fn value(&self, var: Var) -> f64 {
        self.B
            .iter()
            .position(|&b| b == var)
            .map(|i| self.rhs(i))
            .unwrap_or(0.)
    }

    /// Values of the decision variables in the current basic solution.
    pub fn primal_solution(&self) -> nalgebra::DVector<f64> {
        let mut x = nalgebra::DVector::zeros(self.cols());

        for (i, basic) in self.B.iter().enumerate() {
            if let Var::Decision(j) = *basic {
                x[j] = self.rhs(i);
            }
        }

        x
    }

    /// Row holding the auxiliary variable, if it is basic.
    pub fn aux_basic_row(&self) -> Option<usize> {
        self.B.iter().position(|&var| var == Var::Auxiliary)
    }

    /// True when every variable is either basic or non-basic, never both.
    pub fn is_partition(&self) -> bool {
        let mut all: Vec<Var> = self.B.iter().chain(self.N.iter()).copied().collect();
        all.sort();

        let mut expected: Vec<Var> = std::iter::once(Var::Auxiliary)
            .chain((0..self.cols()).map(Var::Decision))
            .chain((0..self.rows()).map(Var::Slack))
            .collect();
        expected.sort();

        all == expected
    }

    /// Exchanges basic variable `B[r]` with non-basic variable `N[s]`.
    ///
    /// Panics if `|D[r][s]| ≤ EPS`: the selection rules never produce such a
    /// pivot, so reaching it means the caller is broken.
    pub fn pivot(&mut self, r: usize, s: usize) {
        assert!(r < self.rows(), "pivot row {} out of range", r);
        assert!(s < self.rhs_col(), "pivot column {} out of range", s);

        let pivot = self.D[(r, s)];

        assert!(
            pivot.abs() > EPS,
            "pivot on near-zero entry {} at ({}, {})",
            pivot,
            r,
            s
        );

        trace!("pivot ({}, {}): {:?} enters, {:?} leaves", r, s, self.N[s], self.B[r]);

        let inv = 1. / pivot;
        let (nrows, ncols) = self.D.shape();

        for i in (0..nrows).filter(|&i| i != r) {
            let factor = self.D[(i, s)] * inv;

            if factor == 0. {
                continue;
            }

            for j in (0..ncols).filter(|&j| j != s) {
                let delta = self.D[(r, j)] * factor;
                self.D[(i, j)] -= delta;
            }
        }

        for j in (0..ncols).filter(|&j| j != s) {
            self.D[(r, j)] *= inv;
        }

        for i in (0..nrows).filter(|&i| i != r) {
            self.D[(i, s)] *= -inv;
        }

        self.D[(r, s)] = inv;

        std::mem::swap(&mut self.B[r], &mut self.N[s]);
    }
}

impl std::fmt::Display for Tableau {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "B: {:?}", self.B)?;
        writeln!(f, "N: {:?}", self.N)?;
        write!(f, "{}", self.D)
    }
}
