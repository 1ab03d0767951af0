use crate::error::EqlpError;

pub type EqlpResult = Result<SolverResult, EqlpError>;

#[derive(Debug, Clone)]
pub enum SolverResult {
    Optimal(Solution),
    Infeasible,
    Unbounded,
    /// The iteration cap was hit; `obj` is the objective of the last basis visited.
    MaxIter { obj: f64 },
}

impl SolverResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolverResult::Optimal(sol) => Some(sol),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    obj: f64,
    x: nalgebra::DVector<f64>,
}

impl Solution {
    pub(crate) fn new(obj: f64, x: nalgebra::DVector<f64>) -> Self {
        Self { obj, x }
    }

    #[inline]
    pub fn obj(&self) -> f64 {
        self.obj
    }

    #[inline]
    pub fn x(&self) -> &nalgebra::DVector<f64> {
        &self.x
    }
}

/// Outcome of a single simplex phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    Optimal,
    Unbounded,
    MaxIter,
}
