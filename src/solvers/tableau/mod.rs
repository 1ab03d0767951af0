pub mod phase;
pub mod tableau_simplex_solver;
