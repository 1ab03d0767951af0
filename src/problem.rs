use crate::error::EqlpError;
use crate::util::EPS;

use std::collections::{HashMap, HashSet};

const EQ_STR: &str = "\u{003D}";
const GTE_STR: &str = "\u{2265}";

/// A linear program `maximize c·x subject to A x = b, x ≥ 0`.
///
/// Every variable is implicitly non-negative. Constraints are equalities;
/// the solver expands each one into a pair of opposing inequalities.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    var_names: HashSet<String>, //these strings are duplicated in the variables
}

impl Problem {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a problem from a dense objective and dense constraint rows.
    pub fn from_dense(obj_coeffs: &[f64], rows: &[(Vec<f64>, f64)]) -> Result<Self, EqlpError> {
        let mut prob = Self::new();

        for &coeff in obj_coeffs {
            prob.add_var(coeff, None)?;
        }

        for (coeffs, rhs) in rows {
            prob.add_dense_constraint(coeffs, *rhs)?;
        }

        Ok(prob)
    }

    pub fn add_var(
        &mut self,
        obj_coeff: f64,
        name: Option<String>,
    ) -> Result<VariableId, EqlpError> {
        if !obj_coeff.is_finite() {
            return Err(EqlpError::invalid(format!(
                "objective coefficient must be finite, got {}",
                obj_coeff
            )));
        }

        if let Some(name) = &name {
            if !self.var_names.insert(name.clone()) {
                return Err(EqlpError::invalid(format!(
                    "variable names must be unique, {} was added twice",
                    name
                )));
            }
        }

        let id = VariableId(self.variables.len());
        self.variables.push(Variable::new(id, obj_coeff, name));
        Ok(id)
    }

    pub fn add_constraint(
        &mut self,
        coeffs: Vec<(VariableId, f64)>,
        rhs: f64,
    ) -> Result<(), EqlpError> {
        if let Some((invalid_var, _coeff)) = coeffs
            .iter()
            .find(|(id, _coeff)| id.0 >= self.variables.len())
        {
            return Err(EqlpError::invalid(format!("{:?} is invalid", invalid_var)));
        }

        if let Some((var, coeff)) = coeffs.iter().find(|(_id, coeff)| !coeff.is_finite()) {
            return Err(EqlpError::invalid(format!(
                "coefficient of {:?} must be finite, got {}",
                var, coeff
            )));
        }

        if !rhs.is_finite() {
            return Err(EqlpError::invalid(format!(
                "right-hand side must be finite, got {}",
                rhs
            )));
        }

        self.constraints.push(Constraint { coeffs, rhs });
        Ok(())
    }

    /// Adds a constraint given one coefficient per variable, in variable order.
    pub fn add_dense_constraint(&mut self, coeffs: &[f64], rhs: f64) -> Result<(), EqlpError> {
        if coeffs.len() != self.variables.len() {
            return Err(EqlpError::invalid(format!(
                "constraint has {} coefficients but the problem has {} variables",
                coeffs.len(),
                self.variables.len()
            )));
        }

        let coeffs = coeffs
            .iter()
            .enumerate()
            .map(|(i, &coeff)| (VariableId(i), coeff))
            .collect();

        self.add_constraint(coeffs, rhs)
    }

    pub fn vars(&self) -> &[Variable] {
        self.variables.as_slice()
    }

    pub fn constraints(&self) -> &[Constraint] {
        self.constraints.as_slice()
    }

    pub fn obj(&self, x: &[f64]) -> f64 {
        self.variables
            .iter()
            .zip(x.iter())
            .map(|(var, x_i)| var.obj_coeff * x_i)
            .sum()
    }

    pub fn is_feasible(&self, x: &[f64]) -> bool {
        if x.len() != self.variables.len() {
            return false;
        }

        if x.iter().any(|&x_i| x_i < -EPS) {
            return false;
        }

        self.constraints
            .iter()
            .all(|constraint| constraint.is_feasible(x))
    }
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub id: VariableId,
    pub obj_coeff: f64,
    pub name: Option<String>,
}

impl Variable {
    fn new(id: VariableId, obj_coeff: f64, name: Option<String>) -> Self {
        Self {
            id,
            obj_coeff,
            name,
        }
    }
}

/// An equality constraint `Σ coeff · x = rhs`. Repeated variables are summed.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coeffs: Vec<(VariableId, f64)>,
    pub rhs: f64,
}

impl Constraint {
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coeffs
            .iter()
            .map(|(var, coeff)| coeff * x[usize::from(var)])
            .sum()
    }

    // tolerance scales with the rhs so that large coefficients don't fail spuriously
    fn is_feasible(&self, x: &[f64]) -> bool {
        let tol = 1e-6 * (1. + self.rhs.abs());
        (self.lhs(x) - self.rhs).abs() <= tol
    }

    fn display(
        &self,
        f: &mut std::fmt::Formatter,
        var_names: &HashMap<VariableId, &Variable>,
    ) -> std::fmt::Result {
        for (var_id, coeff) in &self.coeffs {
            if *coeff == 0. {
                continue;
            }

            match var_names.get(var_id) {
                Some(var) => write!(
                    f,
                    "{} {} {} ",
                    if *coeff >= 0. { "+" } else { "-" },
                    coeff.abs(),
                    var
                )?,
                None => write!(f, "{:+} id[{}] ", coeff, var_id.0)?,
            }
        }

        write!(f, "{} {}", EQ_STR, self.rhs)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(usize);

impl std::convert::From<usize> for VariableId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl std::convert::From<VariableId> for usize {
    fn from(id: VariableId) -> Self {
        id.0
    }
}

impl std::convert::From<&VariableId> for usize {
    fn from(id: &VariableId) -> Self {
        id.0
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "maximize")?;
        let mut var_id_to_var: HashMap<VariableId, &Variable> = HashMap::new();

        for var in &self.variables {
            var_id_to_var.insert(var.id, var);

            if var.obj_coeff == 0. {
                continue;
            }

            write!(
                f,
                "{} {} {} ",
                if var.obj_coeff > 0. { "+" } else { "-" },
                var.obj_coeff.abs(),
                var
            )?;
        }

        writeln!(f, "\n\nsubject to")?;

        for constraint in &self.constraints {
            constraint.display(f, &var_id_to_var)?;
            writeln!(f)?;
        }

        writeln!(f, "\nwith the bounds")?;

        for var in &self.variables {
            writeln!(f, "{} {} 0", var, GTE_STR)?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "x{}", self.id.0),
        }
    }
}
