//! Library of parser functions for the `.rho` grid lines

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{digit1, space1};
use nom::combinator::{all_consuming, eof, map_res, peek};
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::IResult;

/// Check for lines with nothing but whitespace
pub(crate) fn is_blank(i: &str) -> bool {
    i.trim().is_empty()
}

/// Unsigned size value, trimming preceding whitespace
pub(crate) fn uint(i: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(i.trim_start())
}

/// Float that must end on a token boundary, i.e. `100.0s` is rejected
fn whole_f64(i: &str) -> IResult<&str, f64> {
    terminated(double, peek(alt((space1, eof))))(i)
}

/// Token-bounded float that also consumes the whitespace after it
fn separated_f64(i: &str) -> IResult<&str, f64> {
    terminated(double, alt((space1, eof)))(i)
}

/// Zone count and reference time from the second line of a `.rho` file
///
/// Anything following the first two tokens is ignored.
pub(crate) fn grid_info(i: &str) -> IResult<&str, (usize, f64)> {
    let i = i.trim();
    let (i, n_zones) = terminated(uint, peek(alt((space1, eof))))(i)?;
    let (i, time) = preceded(space1, whole_f64)(i)?;
    Ok((i, (n_zones, time)))
}

/// List of whitespace separated doubles as a vector of f64 values
///
/// Every value must be a whole token, so `-1.0-1.0` or `1.0.5` are rejected
/// rather than split into two numbers.
pub(crate) fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    many1(separated_f64)(i.trim_start())
}

/// A full row of grid data, failing on any trailing non-numeric content
pub(crate) fn grid_row(i: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(vector_of_f64)(i.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_info_values() {
        assert_eq!(grid_info("2 100.0"), Ok(("", (2, 100.0))));
        assert_eq!(grid_info("  150   1.2e+03  "), Ok(("", (150, 1200.0))));
    }

    #[test]
    fn grid_info_ignores_trailing_tokens() {
        let (rest, info) = grid_info("80 0.5 4 extra").unwrap();
        assert_eq!(info, (80, 0.5));
        assert_eq!(rest, " 4 extra");
    }

    #[test]
    fn grid_info_failures() {
        assert!(grid_info("").is_err());
        assert!(grid_info("12").is_err());
        assert!(grid_info("zones 100.0").is_err());
        assert!(grid_info("12 time").is_err());
        assert!(grid_info("2.5 100.0").is_err());
        assert!(grid_info("-2 100.0").is_err());
        assert!(grid_info("2 100.0s").is_err());
    }

    #[test]
    fn grid_row_values() {
        assert_eq!(
            grid_row("-1.0 -1.0 10.0 0.0 7.0 0.5 1e7"),
            Ok(("", vec![-1.0, -1.0, 10.0, 0.0, 7.0, 0.5, 1.0e7]))
        );
        assert_eq!(grid_row("\t0.9e7\t-2\r"), Ok(("", vec![0.9e7, -2.0])));
    }

    #[test]
    fn grid_row_failures() {
        assert!(grid_row("").is_err());
        assert!(grid_row("1.0 abc").is_err());
        assert!(grid_row("1.0,2.0").is_err());
        assert!(grid_row("-1.0-1.0").is_err());
        assert!(grid_row("1.0.5").is_err());
        assert!(grid_row("2.0 1e5e3").is_err());
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" 1.0 "));
    }
}
