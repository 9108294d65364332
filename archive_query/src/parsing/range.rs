//! Splitting of `value` / `low .. high` range input.

use regex::Regex;
use std::sync::OnceLock;

use super::error::{InputField, ParseError, ParseResult};

static RANGE_SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

fn range_separator_regex() -> &'static Regex {
    RANGE_SEPARATOR_RE.get_or_init(|| {
        Regex::new(r"\s*\.{2,}\s*").unwrap_or_else(|e| panic!("invalid range pattern: {}", e))
    })
}

/// The raw parts of a range string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRange<'a> {
    Single(&'a str),
    Pair(&'a str, &'a str),
}

/// A single value or an inclusive `(low, high)` pair, in input order.
///
/// No ordering is implied: a right ascension range may legitimately have
/// `low > high` when it crosses 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range<T> {
    Single(T),
    Between(T, T),
}

impl<T> Range<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Range<U> {
        match self {
            Range::Single(value) => Range::Single(f(value)),
            Range::Between(low, high) => Range::Between(f(low), f(high)),
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Range::Single(_))
    }
}

/// Split `input` on a separator of two or more dots (with optional
/// surrounding whitespace), e.g. `"11 .. 14"` or `"11...14"`.
///
/// The order of the two sides is not checked. More than one separator, or an
/// empty side next to a separator, is a
/// [`MalformedRange`](ParseError::MalformedRange) error.
///
/// # Examples
///
/// ```
/// use archive_query::parsing::{split_range, InputField, SplitRange};
///
/// assert_eq!(
///     split_range("355 ... 4", InputField::RightAscension).unwrap(),
///     SplitRange::Pair("355", "4")
/// );
/// assert!(split_range("20:20:20 .. ", InputField::RightAscension).is_err());
/// ```
pub fn split_range(input: &str, field: InputField) -> ParseResult<SplitRange<'_>> {
    let trimmed = input.trim();
    let parts: Vec<&str> = range_separator_regex().split(trimmed).collect();

    match parts.as_slice() {
        [single] => Ok(SplitRange::Single(*single)),
        [low, high] if !low.is_empty() && !high.is_empty() => Ok(SplitRange::Pair(*low, *high)),
        _ => Err(ParseError::MalformedRange {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Split `input` and parse each side with `parser`.
pub fn parse_range<T>(
    input: &str,
    field: InputField,
    parser: impl Fn(&str) -> ParseResult<T>,
) -> ParseResult<Range<T>> {
    match split_range(input, field)? {
        SplitRange::Single(value) => Ok(Range::Single(parser(value)?)),
        SplitRange::Pair(low, high) => Ok(Range::Between(parser(low)?, parser(high)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: InputField = InputField::Declination;

    #[test]
    fn test_single_values() {
        assert_eq!(split_range("12", FIELD).unwrap(), SplitRange::Single("12"));
        assert_eq!(split_range("", FIELD).unwrap(), SplitRange::Single(""));
        assert_eq!(split_range("12.5", FIELD).unwrap(), SplitRange::Single("12.5"));
        assert_eq!(split_range(" 20:20:20 ", FIELD).unwrap(), SplitRange::Single("20:20:20"));
    }

    #[test]
    fn test_pairs_with_various_separators() {
        for input in ["11..14", "11 .. 14", "11...14", "11   ....  14", " 11 ..14 "] {
            assert_eq!(
                split_range(input, FIELD).unwrap(),
                SplitRange::Pair("11", "14"),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_order_is_not_checked() {
        assert_eq!(
            split_range("12 .. -10", FIELD).unwrap(),
            SplitRange::Pair("12", "-10")
        );
    }

    #[test]
    fn test_decimals_next_to_separator() {
        assert_eq!(
            split_range("12.5...13.75", FIELD).unwrap(),
            SplitRange::Pair("12.5", "13.75")
        );
    }

    #[test]
    fn test_malformed_ranges() {
        for input in ["20:20:20 .. ", ".. 5", "..", "1 .. 2 .. 3", "1..2..3"] {
            let err = split_range(input, FIELD).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedRange { field: InputField::Declination, .. }),
                "input {:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_parse_range_applies_parser_per_side() {
        let parse = |s: &str| s.parse::<i32>().map_err(|_| ParseError::invalid_format(FIELD, s));
        assert_eq!(parse_range("3", FIELD, parse).unwrap(), Range::Single(3));
        assert_eq!(parse_range("3 .. 1", FIELD, parse).unwrap(), Range::Between(3, 1));
        assert!(parse_range("3 .. x", FIELD, parse).is_err());
    }

    #[test]
    fn test_range_map() {
        assert_eq!(Range::Between(1, 2).map(|v| v * 10), Range::Between(10, 20));
        assert!(Range::Single(1).is_single());
    }
}
