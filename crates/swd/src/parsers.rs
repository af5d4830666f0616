//! Parser functions for `.swd` rows

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::space1;
use nom::combinator::{all_consuming, eof};
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::terminated;
use nom::IResult;

/// Check for lines with nothing but whitespace
pub(crate) fn is_blank(i: &str) -> bool {
    i.trim().is_empty()
}

/// Whitespace separated values, where every token must be a whole number
///
/// Tokens such as `1.0-2.0` or `3.5e` are rejected rather than split.
pub(crate) fn row(i: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(many1(terminated(double, alt((space1, eof)))))(i.trim())
}
