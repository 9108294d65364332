//! Parsers for free-text search input.
//!
//! This module turns the strings typed into the search form into normalised
//! values, raising a descriptive [`ParseError`] for malformed input.
//!
//! # Parsers
//!
//! - [`date`]: calendar dates in the canonical `YYYY-MM-DD` form
//! - [`coordinates`]: right ascension and declination, decimal or sexagesimal
//! - [`range`]: `value` / `low .. high` splitting shared by all range fields
//! - [`number`]: the decimal number grammar
//!
//! # Example
//!
//! ```
//! use archive_query::parsing::{parse_range, parse_right_ascension, InputField, Range};
//!
//! let range = parse_range("355 .. 4", InputField::RightAscension, parse_right_ascension)
//!     .expect("valid range");
//! assert!(matches!(range, Range::Between(_, _)));
//! ```

pub mod coordinates;
pub mod date;
pub mod error;
pub mod number;
pub mod range;

#[cfg(test)]
mod coordinates_tests;

pub use coordinates::{parse_declination, parse_right_ascension, Declination, RightAscension, Sexagesimal};
pub use date::{parse_date, DateValue};
pub use error::{InputField, ParseError, ParseResult, SexagesimalComponent};
pub use number::{is_decimal, parse_decimal};
pub use range::{parse_range, split_range, Range, SplitRange};
