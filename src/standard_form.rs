#![allow(non_snake_case)]

use crate::problem::Problem;

use log::debug;

/// Inequality form `maximize c·x subject to A x ≤ b, x ≥ 0`.
///
/// Every equality `a·x = β` of the source problem becomes the consecutive
/// rows `a·x ≤ β` and `−a·x ≤ −β`, so `A` always has an even number of rows.
#[derive(Debug, Clone)]
pub struct StandardForm {
    pub c: nalgebra::DVector<f64>,
    pub A: nalgebra::DMatrix<f64>,
    pub b: nalgebra::DVector<f64>,
}

impl std::convert::From<&Problem> for StandardForm {
    fn from(prob: &Problem) -> StandardForm {
        let n = prob.vars().len();
        let m = 2 * prob.constraints().len();

        debug!(
            "expanding {} equality constraints into {} inequality rows",
            prob.constraints().len(),
            m
        );

        let c = nalgebra::DVector::from_iterator(n, prob.vars().iter().map(|var| var.obj_coeff));
        let mut A = nalgebra::DMatrix::zeros(m, n);
        let mut b = nalgebra::DVector::zeros(m);

        for (i, constraint) in prob.constraints().iter().enumerate() {
            let upper = 2 * i;
            let lower = upper + 1;

            b[upper] = constraint.rhs;
            b[lower] = -constraint.rhs;

            for (id, coeff) in &constraint.coeffs {
                let j: usize = id.into();
                A[(upper, j)] += *coeff;
                A[(lower, j)] -= *coeff;
            }
        }

        StandardForm { c, A, b }
    }
}

impl StandardForm {
    pub fn rows(&self) -> usize {
        self.A.nrows()
    }

    pub fn cols(&self) -> usize {
        self.A.ncols()
    }
}
