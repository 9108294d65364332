//! # Archive Query
//!
//! Search-form core of an astronomical observation data archive.
//!
//! This crate turns the free-text fields of an archive search form into a
//! structured where-condition tree for the archive's query engine, and keeps
//! the set of files a user has selected for download.
//!
//! ## Features
//!
//! - **Parsing**: Dates, right ascension and declination (decimal or sexagesimal) and `..` ranges
//! - **Validation**: Per-field error messages and the submit gate
//! - **Conditions**: Composable `AND`/`OR` condition trees, cone searches and pruning
//! - **Cart**: An `id`-deduplicated file selection with pluggable persistence
//!
//! ## Architecture
//!
//! - [`parsing`]: Text to typed values, with descriptive [`parsing::ParseError`]s
//! - [`validation`]: Field validators returning `Option<String>` messages
//! - [`models`]: Search parameter groups and facet enumerations
//! - [`conditions`]: Condition tree, builders and pruning
//! - [`config`]: Column names and observation night convention from TOML
//! - [`cart`]: The data request cart and its stores
//!
//! ## Example
//!
//! ```
//! use archive_query::conditions::ConditionBuilder;
//! use archive_query::models::{GeneralQueryParameters, TargetQueryParameters};
//! use archive_query::validation::is_error;
//!
//! let mut general = GeneralQueryParameters::default();
//! general.set_observation_night("2019-02-17");
//! let mut target = TargetQueryParameters::default();
//! target.set_declination("-10 .. 12");
//! assert!(!is_error(&[&general.errors, &target.errors]));
//!
//! let condition = ConditionBuilder::default()
//!     .search_condition(&general, &target, None)
//!     .unwrap();
//! assert!(condition.is_some());
//! ```

pub mod cart;
pub mod conditions;
pub mod config;
pub mod models;
pub mod parsing;
pub mod validation;
