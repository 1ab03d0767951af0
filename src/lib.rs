mod error;
pub mod parse;
pub mod problem;
pub mod report;
pub mod solver;
mod solvers;
mod standard_form;
pub mod tableau;
mod util;

pub use crate::error::EqlpError;
pub use crate::parse::parse_problem;
pub use crate::problem::{Constraint, Problem, Variable, VariableId};
pub use crate::report::{format_value, render};
pub use crate::solver::{EqlpResult, Solution, SolverResult};
pub use crate::solvers::tableau::tableau_simplex_solver::{
    TableauSimplexSolver, DEFAULT_MAX_ITER,
};
