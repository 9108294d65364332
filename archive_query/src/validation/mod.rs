//! Form field validation.
//!
//! Each validator takes the raw field text and returns `None` when the value is
//! acceptable (the empty string always is) or `Some(message)` with the text to
//! show next to the field. Validators are pure; the same functions back the
//! per-keystroke feedback and the exhaustive check run before a search is
//! submitted.
//!
//! The submit gate is [`is_error`]: a search proceeds only when no error group
//! holds a message.

use log::debug;

use crate::parsing::{
    parse_date, parse_declination, parse_range, parse_right_ascension, InputField, ParseResult,
    Range,
};
use crate::parsing::number::is_decimal;

pub const DATE_ORDER_MESSAGE: &str =
    "In a date range the first date must not be later than the second date.";

pub const CONE_RADIUS_MESSAGE: &str = "The search cone radius must be a positive number.";

/// Types holding one optional error message per form field.
pub trait FieldErrors {
    /// Messages of all fields, `None` for fields without an error.
    fn messages(&self) -> Vec<Option<&str>>;

    /// Whether any field has a non-empty message.
    fn has_errors(&self) -> bool {
        self.messages()
            .into_iter()
            .any(|message| message.is_some_and(|m| !m.is_empty()))
    }
}

/// Whether any field in any of the given error groups holds a message.
///
/// # Examples
///
/// ```
/// use archive_query::models::{GeneralErrors, TargetErrors};
/// use archive_query::validation::is_error;
///
/// let general = GeneralErrors::default();
/// let mut target = TargetErrors::default();
/// assert!(!is_error(&[&general, &target]));
///
/// target.declination = Some("The declination must be between -90 and 90 degrees.".to_string());
/// assert!(is_error(&[&general, &target]));
/// ```
pub fn is_error(groups: &[&dyn FieldErrors]) -> bool {
    groups.iter().any(|group| group.has_errors())
}

fn validate_with<T>(
    value: &str,
    field: InputField,
    parser: impl Fn(&str) -> ParseResult<T>,
) -> Result<Option<Range<T>>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_range(value, field, parser)
        .map(Some)
        .map_err(|e| {
            debug!("Rejected {} input {:?}: {}", field, value, e);
            e.to_string()
        })
}

/// Validate an observation date or date range.
pub fn validate_date(value: &str) -> Option<String> {
    match validate_with(value, InputField::Date, parse_date) {
        Ok(Some(Range::Between(start, end))) if start > end => Some(DATE_ORDER_MESSAGE.to_string()),
        Ok(_) => None,
        Err(message) => Some(message),
    }
}

/// Validate a right ascension or right ascension range.
///
/// The order of a range is not checked; `low > high` is a range crossing 0°.
pub fn validate_right_ascension(value: &str) -> Option<String> {
    validate_with(value, InputField::RightAscension, parse_right_ascension).err()
}

/// Validate a declination or declination range. Either order is accepted.
pub fn validate_declination(value: &str) -> Option<String> {
    validate_with(value, InputField::Declination, parse_declination).err()
}

/// Validate the cone search radius: empty, or a strictly positive number.
pub fn validate_search_cone_radius(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(radius) if is_float(trimmed) && radius.is_finite() && radius > 0.0 => None,
        _ => Some(CONE_RADIUS_MESSAGE.to_string()),
    }
}

/// Whether `value` is a decimal number (optional sign, digits, optional
/// fraction, optional exponent).
pub fn is_float(value: &str) -> bool {
    is_decimal(value)
}

/// Whether `values` holds exactly one element and that element is a decimal
/// number.
///
/// # Examples
///
/// ```
/// use archive_query::validation::is_float_sole;
///
/// assert!(is_float_sole(["2.5"]));
/// assert!(!is_float_sole(["2.5", "3"]));
/// assert!(!is_float_sole(Vec::<String>::new()));
/// ```
pub fn is_float_sole<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut iter = values.into_iter();
    match (iter.next(), iter.next()) {
        (Some(only), None) => is_float(only.as_ref()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_valid() {
        for value in ["", "   "] {
            assert_eq!(validate_date(value), None);
            assert_eq!(validate_right_ascension(value), None);
            assert_eq!(validate_declination(value), None);
            assert_eq!(validate_search_cone_radius(value), None);
        }
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("2019-02-17"), None);
        assert_eq!(validate_date("2019-02-17 .. 2019-03-01"), None);
        assert_eq!(validate_date("2019-02-17..2019-02-17"), None);

        let message = validate_date("2019-02-29").unwrap();
        assert!(message.contains("2019-02-29"));
        assert!(message.contains("valid"));

        assert!(validate_date("2019/02/17").unwrap().contains("YYYY-MM-DD"));
        assert!(validate_date("2019-02-17 .. ").unwrap().contains("range"));
        assert!(validate_date("2019-02-17 .. 2019-02-30").unwrap().contains("2019-02-30"));
    }

    #[test]
    fn test_validate_date_range_order() {
        assert_eq!(
            validate_date("2019-03-01 .. 2019-02-17").as_deref(),
            Some(DATE_ORDER_MESSAGE)
        );
    }

    #[test]
    fn test_validate_right_ascension() {
        assert_eq!(validate_right_ascension("20:34:12"), None);
        assert_eq!(validate_right_ascension("355 ... 4"), None);
        assert_eq!(validate_right_ascension("10 .. 20"), None);
        assert!(validate_right_ascension("25:22:11").unwrap().contains("hours: 25"));
        assert!(validate_right_ascension("10 .. 10:70:00").unwrap().contains("minutes: 70"));
        assert!(validate_right_ascension("20:34").is_some());
    }

    #[test]
    fn test_validate_declination() {
        assert_eq!(validate_declination("-20:34:12"), None);
        assert_eq!(validate_declination("12 .. -10"), None);
        assert!(validate_declination("370")
            .unwrap()
            .contains("between -90 and 90 degrees"));
        assert!(validate_declination("10:61:00")
            .unwrap()
            .contains("minutes and seconds should be between 0 and 59"));
    }

    #[test]
    fn test_validate_search_cone_radius() {
        assert_eq!(validate_search_cone_radius("2.5"), None);
        assert_eq!(validate_search_cone_radius("1e-2"), None);
        for value in ["0", "-1", "abc", "inf", "1 .. 2", "1e400"] {
            assert_eq!(
                validate_search_cone_radius(value).as_deref(),
                Some(CONE_RADIUS_MESSAGE),
                "{}",
                value
            );
        }
    }

    #[test]
    fn test_is_float() {
        assert!(is_float("12"));
        assert!(is_float("-1.5e3"));
        assert!(!is_float("twelve"));
        assert!(!is_float("1.2.3"));
        assert!(!is_float(""));
    }

    #[test]
    fn test_is_float_sole() {
        assert!(is_float_sole(vec!["7".to_string()]));
        assert!(!is_float_sole(["x"]));
        assert!(!is_float_sole(["1", "2"]));
    }
}
