//! Domain models for search requests.
//!
//! - [`query`]: the general, target and telescope parameter groups with their
//!   per-field validation messages
//! - [`types`]: facet enumerations (product types, target types, resolvers,
//!   radius units)

pub mod query;
pub mod types;

pub use query::{
    GeneralErrors, GeneralQueryParameters, TargetErrors, TargetQueryParameters, TelescopeFacet,
    TelescopeQueryParameters, ALL_VALUE,
};
pub use types::{ProductType, RadiusUnits, Resolver, TargetType};
