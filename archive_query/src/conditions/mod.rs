//! Where-condition construction.
//!
//! This module maps validated search parameters to the structured filter tree
//! consumed by the archive query engine.
//!
//! # Module Organization
//!
//! - [`node`]: the [`ConditionNode`] tree and its wire representation
//! - [`columns`]: the backend column-name table
//! - [`builder`]: general, target and telescope condition builders
//! - [`prune`](mod@prune): removal of empty branches
//! - [`error`]: contract-violation errors raised by the builders
//!
//! # Example
//!
//! ```
//! use archive_query::conditions::{prune, where_condition};
//! use archive_query::models::{GeneralQueryParameters, TargetQueryParameters};
//!
//! let general = GeneralQueryParameters::default();
//! let target = TargetQueryParameters::default();
//! let tree = where_condition(&general, &target, None).unwrap();
//! assert_eq!(prune(&tree), None);
//! ```

pub mod builder;
pub mod columns;
pub mod error;
pub mod node;
pub mod prune;


pub use builder::{
    general_where_condition, target_where_condition, telescope_where_condition, where_condition,
    ConditionBuilder,
};
pub use columns::ColumnNames;
pub use error::{QueryError, QueryResult};
pub use node::{Comparison, ConditionNode, ConditionValue, ConeCondition, SkyPoint};
pub use prune::prune;
