//! Error types for scalar and range parsing.
//!
//! The `Display` text of every variant is the message shown next to the
//! offending form field, so each one names the value (or component) that
//! failed.

use std::fmt;

/// Result type for the scalar parsers.
pub type ParseResult<T> = Result<T, ParseError>;

/// The kind of user input being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    RightAscension,
    Declination,
    Date,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::RightAscension => "right ascension",
            InputField::Declination => "declination",
            InputField::Date => "date",
        }
    }

    /// Accepted input forms, appended to format errors.
    pub fn expected_format(&self) -> &'static str {
        match self {
            InputField::RightAscension => {
                "Use decimal degrees or the form HH:MM:SS."
            }
            InputField::Declination => {
                "Use decimal degrees or degrees, arcminutes and arcseconds such as -20:34:12."
            }
            InputField::Date => "Dates must be of the form YYYY-MM-DD.",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named part of a sexagesimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexagesimalComponent {
    Hours,
    Minutes,
    Seconds,
}

impl SexagesimalComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SexagesimalComponent::Hours => "hours",
            SexagesimalComponent::Minutes => "minutes",
            SexagesimalComponent::Seconds => "seconds",
        }
    }
}

impl fmt::Display for SexagesimalComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by the scalar parsers and the range splitter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The input matches none of the accepted forms.
    #[error("\"{value}\" is not a valid {field}. {}", .field.expected_format())]
    InvalidFormat { field: InputField, value: String },

    /// The input has the right shape but names a non-existent calendar date.
    #[error("{value} is not a valid date.")]
    InvalidDate { value: String },

    /// Bad `low .. high` syntax.
    #[error("\"{value}\" is not a valid {field} range. Use a single value or the form value .. value.")]
    MalformedRange { field: InputField, value: String },

    /// A sexagesimal component lies outside `[0, limit)`.
    #[error("The {field} {component} must be at least 0 and less than {limit} ({component}: {value}).")]
    ComponentOutOfRange {
        field: InputField,
        component: SexagesimalComponent,
        value: String,
        limit: u32,
    },

    /// The value in degrees lies outside the coordinate's domain.
    #[error("The {field} must be {bounds} degrees.")]
    OutOfRange { field: InputField, bounds: &'static str },

    /// Declination arcminutes or arcseconds outside `[0, 60)`.
    #[error("The declination minutes and seconds should be between 0 and 59 (got \"{value}\").")]
    ArcComponentOutOfRange { value: String },
}

impl ParseError {
    pub(crate) fn invalid_format(field: InputField, value: &str) -> Self {
        ParseError::InvalidFormat {
            field,
            value: value.to_string(),
        }
    }

    /// The field this error refers to.
    pub fn field(&self) -> InputField {
        match self {
            ParseError::InvalidFormat { field, .. }
            | ParseError::MalformedRange { field, .. }
            | ParseError::ComponentOutOfRange { field, .. }
            | ParseError::OutOfRange { field, .. } => *field,
            ParseError::InvalidDate { .. } => InputField::Date,
            ParseError::ArcComponentOutOfRange { .. } => InputField::Declination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_message_names_value() {
        let err = ParseError::ComponentOutOfRange {
            field: InputField::RightAscension,
            component: SexagesimalComponent::Minutes,
            value: "70".to_string(),
            limit: 60,
        };
        let message = err.to_string();
        assert!(message.contains("minutes: 70"), "{}", message);
        assert!(message.contains("right ascension"));
    }

    #[test]
    fn test_field_of_error() {
        let err = ParseError::InvalidDate {
            value: "2019-02-29".to_string(),
        };
        assert_eq!(err.field(), InputField::Date);
        let err = ParseError::ArcComponentOutOfRange {
            value: "10:61:00".to_string(),
        };
        assert_eq!(err.field(), InputField::Declination);
    }
}
