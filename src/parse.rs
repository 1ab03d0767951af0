use crate::error::EqlpError;
use crate::problem::Problem;

use nom::bytes::complete::take_till1;
use nom::character::complete::multispace0;
use nom::combinator::{eof, map_res, verify};
use nom::error::{context, convert_error, VerboseError};
use nom::multi::count;
use nom::sequence::{pair, preceded};
use nom::IResult;

use log::debug;

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

impl std::str::FromStr for Problem {
    type Err = EqlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_problem(s)
    }
}

/// Reads a problem in the whitespace-separated text format:
///
/// ```text
/// n m
/// c_1 ... c_m
/// a_11 ... a_1m b_1
/// ...
/// a_n1 ... a_nm b_n
/// ```
///
/// where `n` is the number of equality constraints and `m` the number of
/// variables. The objective `c·x` is maximized subject to `A x = b, x ≥ 0`.
pub fn parse_problem(text: &str) -> Result<Problem, EqlpError> {
    let (_, (obj, rows)) = match problem(text) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(EqlpError::malformed(convert_error(text, e)))
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(EqlpError::malformed("unexpected end of input".to_string()))
        }
    };

    debug!(
        "parsed problem with {} variables and {} constraints",
        obj.len(),
        rows.len()
    );

    Problem::from_dense(&obj, &rows)
}

type Rows = Vec<(Vec<f64>, f64)>;

fn problem(i: &str) -> Res<'_, (Vec<f64>, Rows)> {
    let (i, n) = context("constraint count", size)(i)?;
    let (i, m) = context("variable count", size)(i)?;
    let (i, obj) = context("objective coefficients", count(number, m))(i)?;
    let (i, rows) = context(
        "constraint rows",
        count(pair(count(number, m), context("right-hand side", number)), n),
    )(i)?;
    let (i, _) = context("end of input", preceded(multispace0, eof))(i)?;

    Ok((i, (obj, rows)))
}

fn token(i: &str) -> Res<'_, &str> {
    preceded(multispace0, take_till1(char::is_whitespace))(i)
}

fn size(i: &str) -> Res<'_, usize> {
    map_res(token, str::parse::<usize>)(i)
}

fn number(i: &str) -> Res<'_, f64> {
    context(
        "finite number",
        verify(map_res(token, str::parse::<f64>), |v: &f64| v.is_finite()),
    )(i)
}
