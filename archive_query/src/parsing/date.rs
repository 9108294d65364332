//! Calendar date parsing in the canonical `YYYY-MM-DD` form.

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::error::{InputField, ParseError, ParseResult};

static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn date_regex() -> &'static Regex {
    DATE_RE.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$")
            .unwrap_or_else(|e| panic!("invalid date pattern: {}", e))
    })
}

/// A Gregorian calendar date.
///
/// Displays (and serializes) in the canonical `YYYY-MM-DD` form, so
/// `parse_date(&d.to_string())` always returns `d`.
///
/// # Examples
///
/// ```
/// use archive_query::parsing::parse_date;
///
/// let date = parse_date("2019-02-17").unwrap();
/// assert_eq!(date.to_string(), "2019-02-17");
/// assert!(parse_date("2019-02-29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateValue(NaiveDate);

impl DateValue {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following calendar day, or `None` past chrono's supported range.
    pub fn next_day(&self) -> Option<DateValue> {
        self.0.checked_add_days(Days::new(1)).map(DateValue)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl TryFrom<String> for DateValue {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_date(&value)
    }
}

impl From<DateValue> for String {
    fn from(value: DateValue) -> Self {
        value.to_string()
    }
}

/// Parse a date of the literal form `YYYY-MM-DD`.
///
/// Variable-width fields and other separators are an
/// [`InvalidFormat`](ParseError::InvalidFormat) error; a well-formed string
/// naming a day that does not exist is [`InvalidDate`](ParseError::InvalidDate).
pub fn parse_date(input: &str) -> ParseResult<DateValue> {
    let trimmed = input.trim();
    let captures = date_regex()
        .captures(trimmed)
        .ok_or_else(|| ParseError::invalid_format(InputField::Date, trimmed))?;

    let invalid_date = || ParseError::InvalidDate {
        value: trimmed.to_string(),
    };

    // The pattern guarantees ASCII digits, so these only fail on overflow.
    let year: i32 = captures[1].parse().map_err(|_| invalid_date())?;
    let month: u32 = captures[2].parse().map_err(|_| invalid_date())?;
    let day: u32 = captures[3].parse().map_err(|_| invalid_date())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(DateValue)
        .ok_or_else(invalid_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        let date = parse_date("2019-02-17").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2019, 2, 17));

        let leap = parse_date("2020-02-29").unwrap();
        assert_eq!(leap.to_string(), "2020-02-29");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_date("  2021-07-04 ").unwrap().to_string(), "2021-07-04");
    }

    #[test]
    fn test_reject_wrong_format() {
        for value in ["2019/01/01", "19-01-2019", "2019-1-10", "2019-01-1", "", "yesterday", "2019-01-01T00:00"] {
            let err = parse_date(value).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidFormat { field: InputField::Date, .. }),
                "{} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_reject_non_existent_dates() {
        for value in ["2019-02-29", "2019-13-01", "2019-01-34", "2019-00-10", "2019-04-31"] {
            let err = parse_date(value).unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidDate {
                    value: value.to_string()
                }
            );
            let message = err.to_string();
            assert!(message.contains(value));
            assert!(message.contains("valid"));
        }
    }

    #[test]
    fn test_next_day_crosses_month_and_year() {
        assert_eq!(parse_date("2019-02-28").unwrap().next_day().unwrap().to_string(), "2019-03-01");
        assert_eq!(parse_date("2019-12-31").unwrap().next_day().unwrap().to_string(), "2020-01-01");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(parse_date("2019-01-31").unwrap() < parse_date("2019-02-01").unwrap());
    }

    #[test]
    fn test_serde_uses_canonical_form() {
        let date = parse_date("2018-11-05").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2018-11-05\"");
        let back: DateValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<DateValue>("\"2018-11-31\"").is_err());
    }
}
