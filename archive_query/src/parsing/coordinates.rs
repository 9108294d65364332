//! Right ascension and declination parsing.
//!
//! Both coordinates accept decimal degrees or a sexagesimal triple and are
//! normalised to [`qtty::Degrees`]. The sexagesimal components are kept on the
//! parsed value so callers can echo them back in messages.

use qtty::{Degree, Degrees, HourAngles};
use regex::Regex;
use std::sync::OnceLock;

use super::error::{InputField, ParseError, ParseResult, SexagesimalComponent};
use super::number::parse_decimal;

/// Sexagesimal components as entered: hours (or degrees), minutes, seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub major: f64,
    pub minutes: f64,
    pub seconds: f64,
}

/// A right ascension in `[0, 360)` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightAscension {
    degrees: Degrees,
    sexagesimal: Option<Sexagesimal>,
}

impl RightAscension {
    /// Decimal degrees.
    pub fn degrees(&self) -> f64 {
        self.degrees.value()
    }

    pub fn quantity(&self) -> Degrees {
        self.degrees
    }

    /// Hours, minutes and seconds when the value was entered as `HH:MM:SS`.
    pub fn sexagesimal(&self) -> Option<Sexagesimal> {
        self.sexagesimal
    }
}

/// A declination in `[-90, 90]` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declination {
    degrees: Degrees,
    sexagesimal: Option<Sexagesimal>,
}

impl Declination {
    /// Decimal degrees.
    pub fn degrees(&self) -> f64 {
        self.degrees.value()
    }

    pub fn quantity(&self) -> Degrees {
        self.degrees
    }

    /// Degrees, arcminutes and arcseconds when entered in sexagesimal form.
    /// `major` carries the sign.
    pub fn sexagesimal(&self) -> Option<Sexagesimal> {
        self.sexagesimal
    }
}

static DECLINATION_DMS_RE: OnceLock<Regex> = OnceLock::new();

fn declination_dms_regex() -> &'static Regex {
    DECLINATION_DMS_RE.get_or_init(|| {
        // sign, degrees, separator, arcminutes, separator, arcseconds, optional unit suffix
        Regex::new(
            r"^([+-]?)(\d+)[^\d+\-.]+(\d+(?:\.\d+)?)[^\d+\-.]+(\d+(?:\.\d+)?)[^\d+\-.]*$",
        )
        .unwrap_or_else(|e| panic!("invalid declination pattern: {}", e))
    })
}

/// Parse a right ascension given in decimal degrees or as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use archive_query::parsing::parse_right_ascension;
///
/// let ra = parse_right_ascension("01:00:00").unwrap();
/// assert!((ra.degrees() - 15.0).abs() < 1e-12);
///
/// let err = parse_right_ascension("25:22:11").unwrap_err();
/// assert!(err.to_string().contains("hours: 25"));
/// ```
pub fn parse_right_ascension(input: &str) -> ParseResult<RightAscension> {
    let trimmed = input.trim();

    if trimmed.contains(':') {
        return parse_hms(trimmed);
    }

    let degrees = parse_decimal(trimmed)
        .ok_or_else(|| ParseError::invalid_format(InputField::RightAscension, trimmed))?;
    if !(0.0..360.0).contains(&degrees) {
        return Err(ParseError::OutOfRange {
            field: InputField::RightAscension,
            bounds: "between 0 and 360",
        });
    }

    Ok(RightAscension {
        degrees: Degrees::new(degrees),
        sexagesimal: None,
    })
}

fn parse_hms(value: &str) -> ParseResult<RightAscension> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return Err(ParseError::invalid_format(InputField::RightAscension, value));
    }

    let mut numbers = [0.0_f64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = parse_decimal(part)
            .ok_or_else(|| ParseError::invalid_format(InputField::RightAscension, value))?;
    }
    let [hours, minutes, seconds] = numbers;

    let checks = [
        (SexagesimalComponent::Hours, hours, parts[0], 24),
        (SexagesimalComponent::Minutes, minutes, parts[1], 60),
        (SexagesimalComponent::Seconds, seconds, parts[2], 60),
    ];
    for (component, number, text, limit) in checks {
        if !(0.0..f64::from(limit)).contains(&number) {
            return Err(ParseError::ComponentOutOfRange {
                field: InputField::RightAscension,
                component,
                value: text.trim().to_string(),
                limit,
            });
        }
    }

    let total_hours = hours + minutes / 60.0 + seconds / 3600.0;
    let degrees = HourAngles::new(total_hours).to::<Degree>();
    // Fractional hours can still push the sum past 24h.
    if degrees.value() >= 360.0 {
        return Err(ParseError::OutOfRange {
            field: InputField::RightAscension,
            bounds: "between 0 and 360",
        });
    }

    Ok(RightAscension {
        degrees,
        sexagesimal: Some(Sexagesimal {
            major: hours,
            minutes,
            seconds,
        }),
    })
}

/// Parse a declination given in decimal degrees or as degrees, arcminutes and
/// arcseconds (`-20:34:12`, `20 34 12`, `20D34M12S`, `20°34'12"`).
///
/// # Examples
///
/// ```
/// use archive_query::parsing::parse_declination;
///
/// let dec = parse_declination("-00:30:00").unwrap();
/// assert!((dec.degrees() + 0.5).abs() < 1e-12);
/// assert!(parse_declination("370").is_err());
/// ```
pub fn parse_declination(input: &str) -> ParseResult<Declination> {
    let trimmed = input.trim();

    let (degrees, sexagesimal) = if let Some(degrees) = parse_decimal(trimmed) {
        (degrees, None)
    } else {
        let captures = declination_dms_regex()
            .captures(trimmed)
            .ok_or_else(|| ParseError::invalid_format(InputField::Declination, trimmed))?;

        let component = |index: usize| {
            parse_decimal(&captures[index])
                .ok_or_else(|| ParseError::invalid_format(InputField::Declination, trimmed))
        };
        let sign = if &captures[1] == "-" { -1.0 } else { 1.0 };
        let whole = component(2)?;
        let minutes = component(3)?;
        let seconds = component(4)?;

        if minutes >= 60.0 || seconds >= 60.0 {
            return Err(ParseError::ArcComponentOutOfRange {
                value: trimmed.to_string(),
            });
        }

        let total = sign * (whole + minutes / 60.0 + seconds / 3600.0);
        (
            total,
            Some(Sexagesimal {
                major: sign * whole,
                minutes,
                seconds,
            }),
        )
    };

    if !(-90.0..=90.0).contains(&degrees) {
        return Err(ParseError::OutOfRange {
            field: InputField::Declination,
            bounds: "between -90 and 90",
        });
    }

    Ok(Declination {
        degrees: Degrees::new(degrees),
        sexagesimal,
    })
}
