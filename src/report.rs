use crate::solver::SolverResult;

pub const OPTIMAL: &str = "otima";
pub const INFEASIBLE: &str = "inviavel";
pub const UNBOUNDED: &str = "ilimitada";

/// Renders `v` rounded half away from zero to three decimals, with trailing
/// zeros dropped but at least one fractional digit kept: `5.0`, `2.375`,
/// `-0.5`. Values that round to zero never carry a minus sign.
pub fn format_value(v: f64) -> String {
    let abs = v.abs();
    let mut int = abs.trunc();
    // `abs - int` is exact and below one, so scaling it cannot overflow
    let mut frac = ((abs - int) * 1000.).round();
    if frac >= 1000. {
        int += 1.;
        frac = 0.;
    }

    let sign = if v < 0. && (int > 0. || frac > 0.) { "-" } else { "" };
    let mut s = format!("{}{:.0}.{:03}", sign, int, frac as u32);

    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }

    s
}

/// Contents of the output file for `result`, or `None` for results the file
/// format has no status for.
pub fn render(result: &SolverResult) -> Option<String> {
    match result {
        SolverResult::Optimal(sol) => Some(format!("{}\n{}\n", OPTIMAL, format_value(sol.obj()))),
        SolverResult::Infeasible => Some(format!("{}\n", INFEASIBLE)),
        SolverResult::Unbounded => Some(format!("{}\n", UNBOUNDED)),
        SolverResult::MaxIter { .. } => None,
    }
}
