use eqlp::*;

const EPS: f64 = 0.00000001;

pub fn assert_optimal(result: &SolverResult, expected_obj: f64, expected_x: &[f64]) {
    match result {
        SolverResult::Optimal(sol) => {
            assert!(
                (sol.obj() - expected_obj).abs() < EPS,
                "obj: {}, expected: {}",
                sol.obj(),
                expected_obj
            );

            let x = sol.x();

            assert_eq!(x.len(), expected_x.len());

            for (x1, x2) in x.iter().zip(expected_x) {
                assert!((x1 - x2).abs() < EPS, "x_i: {}, expected: {}", x1, x2);
            }
        }

        _ => panic!("not optimal: {:?}", result),
    }
}

pub fn assert_optimal_obj(result: &SolverResult, expected_obj: f64) {
    match result {
        SolverResult::Optimal(sol) => {
            assert!(
                (sol.obj() - expected_obj).abs() < EPS,
                "obj: {}, expected: {}",
                sol.obj(),
                expected_obj
            );
        }

        _ => panic!("not optimal: {:?}", result),
    }
}

pub fn assert_infeasible(result: &SolverResult) {
    match result {
        SolverResult::Infeasible => (),
        _ => panic!("not infeasible: {:?}", result),
    }
}

pub fn assert_unbounded(result: &SolverResult) {
    match result {
        SolverResult::Unbounded => (),
        _ => panic!("not unbounded: {:?}", result),
    }
}

pub fn assert_max_iter(result: &SolverResult) {
    match result {
        SolverResult::MaxIter { .. } => (),
        _ => panic!("did not hit the iteration cap: {:?}", result),
    }
}

pub struct TestProblem {
    pub prob: Problem,
    pub check_result: Box<dyn FnOnce(&SolverResult)>,
}

impl TestProblem {
    fn new<F: FnOnce(&SolverResult) + 'static>(prob: Problem, check_result: F) -> Self {
        Self {
            prob,
            check_result: Box::new(check_result),
        }
    }
}

pub fn empty_problem() -> TestProblem {
    let prob = Problem::new();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 0., &[])
    })
}

pub fn one_variable_no_constraints() -> TestProblem {
    let mut prob = Problem::new();

    prob.add_var(-2., Some("x1".to_string())).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 0., &[0.])
    })
}

pub fn one_variable_fixed() -> TestProblem {
    let mut prob = Problem::new();

    let x1 = prob.add_var(1., Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![(x1, 1.)], 5.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 5., &[5.])
    })
}

pub fn one_variable_infeasible() -> TestProblem {
    let mut prob = Problem::new();

    let x1 = prob.add_var(1., Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![(x1, 1.)], 1.).unwrap();
    prob.add_constraint(vec![(x1, 1.)], 2.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_infeasible(result))
}

pub fn one_variable_negative_rhs() -> TestProblem {
    let mut prob = Problem::new();

    let x1 = prob.add_var(1., Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![(x1, 2.)], -3.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_infeasible(result))
}

pub fn one_variable_unbounded() -> TestProblem {
    let mut prob = Problem::new();

    prob.add_var(2., Some("x1".to_string())).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_unbounded(result))
}

pub fn two_variables_unbounded() -> TestProblem {
    let mut prob = Problem::new();

    let x1 = prob.add_var(1., Some("x1".to_string())).unwrap();
    let x2 = prob.add_var(0., Some("x2".to_string())).unwrap();

    prob.add_constraint(vec![(x1, 1.), (x2, -1.)], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_unbounded(result))
}

pub fn two_variables_infeasible() -> TestProblem {
    let mut prob = Problem::new();

    let x1 = prob.add_var(2., Some("x1".to_string())).unwrap();
    let x2 = prob.add_var(2., Some("x2".to_string())).unwrap();

    prob.add_constraint(vec![(x1, 1.), (x2, 1.)], -1.).unwrap();
    prob.add_constraint(vec![(x1, 2.), (x2, 2.)], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_infeasible(result))
}

pub fn infeasible_constraint_without_coeffs() -> TestProblem {
    let mut prob = Problem::new();

    prob.add_var(2., Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_infeasible(result))
}

pub fn feasible_constraint_without_coeffs() -> TestProblem {
    let mut prob = Problem::new();

    prob.add_var(-3., Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![], 0.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 0., &[0.])
    })
}

pub fn feasible_constraint_without_coeffs_and_no_vars() -> TestProblem {
    let mut prob = Problem::new();
    prob.add_constraint(vec![], 0.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 0., &[])
    })
}

pub fn infeasible_constraint_without_coeffs_and_no_vars() -> TestProblem {
    let mut prob = Problem::new();
    prob.add_constraint(vec![], -1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_infeasible(result))
}

pub fn linear_system_2d() -> TestProblem {
    let mut prob = Problem::new();

    let x = prob.add_var(1., Some("x".to_string())).unwrap();
    let y = prob.add_var(4. / 3., Some("y".to_string())).unwrap();

    prob.add_constraint(vec![(x, 1.), (y, 2.)], 3.).unwrap();
    prob.add_constraint(vec![(x, 2.), (y, -1.)], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 7. / 3., &[1., 1.])
    })
}

pub fn linear_system_3d() -> TestProblem {
    let mut prob = Problem::new();

    let x = prob.add_var(1., Some("x".to_string())).unwrap();
    let y = prob.add_var(-1., Some("y".to_string())).unwrap();
    let z = prob.add_var(2., Some("z".to_string())).unwrap();

    prob.add_constraint(vec![(x, 1.), (y, 1.), (z, 1.)], 6.).unwrap();
    prob.add_constraint(vec![(y, 2.), (z, 5.)], 19.).unwrap();
    prob.add_constraint(vec![(x, 2.), (y, 5.), (z, -1.)], 9.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 5., &[1., 2., 3.])
    })
}

pub fn linear_system_3d_infeasible() -> TestProblem {
    let mut prob = Problem::new();

    let x = prob.add_var(1., Some("x".to_string())).unwrap();
    let y = prob.add_var(1., Some("y".to_string())).unwrap();
    let z = prob.add_var(1., Some("z".to_string())).unwrap();

    prob.add_constraint(vec![(x, 1.), (y, 1.), (z, 1.)], 1.).unwrap();
    prob.add_constraint(vec![(x, 1.), (y, -1.)], 0.).unwrap();
    prob.add_constraint(vec![(x, 2.), (y, 2.), (z, 2.)], 3.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_infeasible(result))
}

pub fn redundant_constraints() -> TestProblem {
    let mut prob = Problem::new();

    let x = prob.add_var(2., Some("x".to_string())).unwrap();
    let y = prob.add_var(1., Some("y".to_string())).unwrap();

    prob.add_constraint(vec![(x, 1.), (y, 1.)], 2.).unwrap();
    prob.add_constraint(vec![(x, 2.), (y, 2.)], 4.).unwrap();
    prob.add_constraint(vec![(x, -1.), (y, -1.)], -2.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 4., &[2., 0.])
    })
}

// maximize 3 x1 + 5 x2 with x1 <= 4, 2 x2 <= 12, 3 x1 + 2 x2 <= 18 written with slacks
pub fn small_prob_1() -> TestProblem {
    //setup_logger(log::LevelFilter::Trace);

    let mut prob = Problem::new();

    let x1 = prob.add_var(3., Some("x1".to_string())).unwrap();
    let x2 = prob.add_var(5., Some("x2".to_string())).unwrap();
    let s1 = prob.add_var(0., Some("s1".to_string())).unwrap();
    let s2 = prob.add_var(0., Some("s2".to_string())).unwrap();
    let s3 = prob.add_var(0., Some("s3".to_string())).unwrap();

    prob.add_constraint(vec![(x1, 1.), (s1, 1.)], 4.).unwrap();
    prob.add_constraint(vec![(x2, 2.), (s2, 1.)], 12.).unwrap();
    prob.add_constraint(vec![(x1, 3.), (x2, 2.), (s3, 1.)], 18.)
        .unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, 36., &[2., 6., 2., 0., 0.])
    })
}

// minimize 2 x + 3 y with x + y >= 4 and x >= 1
pub fn small_prob_2() -> TestProblem {
    // setup_logger(log::LevelFilter::Trace);
    let mut prob = Problem::new();

    let x = prob.add_var(-2., Some("x".to_string())).unwrap();
    let y = prob.add_var(-3., Some("y".to_string())).unwrap();
    let s = prob.add_var(0., Some("s".to_string())).unwrap();
    let t = prob.add_var(0., Some("t".to_string())).unwrap();

    prob.add_constraint(vec![(x, 1.), (y, 1.), (s, -1.)], 4.)
        .unwrap();
    prob.add_constraint(vec![(x, 1.), (t, -1.)], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal(result, -8., &[4., 0., 0., 3.])
    })
}

// the optimal face is an edge, only the objective is unique
pub fn small_prob_multiple_optima() -> TestProblem {
    let mut prob = Problem::new();

    let x = prob.add_var(1., Some("x".to_string())).unwrap();
    let y = prob.add_var(1., Some("y".to_string())).unwrap();
    let s = prob.add_var(0., Some("s".to_string())).unwrap();

    prob.add_constraint(vec![(x, 1.), (y, 1.), (s, 1.)], 10.)
        .unwrap();

    TestProblem::new(prob, |result: &SolverResult| {
        assert_optimal_obj(result, 10.)
    })
}

pub fn small_prob_unbounded() -> TestProblem {
    let mut prob = Problem::new();

    let x = prob.add_var(1., Some("x".to_string())).unwrap();
    let y = prob.add_var(-1., Some("y".to_string())).unwrap();
    let z = prob.add_var(1., Some("z".to_string())).unwrap();
    let w = prob.add_var(0., Some("w".to_string())).unwrap();

    //x and z can grow together without bound
    prob.add_constraint(vec![(x, 1.), (y, 1.), (z, -1.)], 3.)
        .unwrap();
    prob.add_constraint(vec![(y, 1.), (w, -1.)], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_unbounded(result))
}

// Beale's example. The epsilon-tolerant tie-breaks do not prevent cycling here:
// phase 2 repeats the same four degenerate pivots until the cap stops it.
pub fn beale_cycle() -> TestProblem {
    // setup_logger(log::LevelFilter::Trace);

    let mut prob = Problem::new();

    let x = prob.add_var(10., Some("x".to_string())).unwrap();
    let y = prob.add_var(-57., Some("y".to_string())).unwrap();
    let z = prob.add_var(-9., Some("z".to_string())).unwrap();
    let w = prob.add_var(-24., Some("w".to_string())).unwrap();
    let s1 = prob.add_var(0., Some("s1".to_string())).unwrap();
    let s2 = prob.add_var(0., Some("s2".to_string())).unwrap();
    let s3 = prob.add_var(0., Some("s3".to_string())).unwrap();

    prob.add_constraint(
        vec![(x, -0.5), (y, 5.5), (z, 2.5), (w, -9.), (s1, -1.)],
        0.,
    )
    .unwrap();

    prob.add_constraint(
        vec![(x, -0.5), (y, 1.5), (z, 0.5), (w, -1.), (s2, -1.)],
        0.,
    )
    .unwrap();

    prob.add_constraint(vec![(x, 1.), (s3, 1.)], 1.).unwrap();

    TestProblem::new(prob, |result: &SolverResult| assert_max_iter(result))
}
