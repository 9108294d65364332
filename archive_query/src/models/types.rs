//! Enumerations used as search facets and condition values.

use qtty::{Arcminutes, Arcseconds, Degree, Degrees};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data category of an archived file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Arc,
    Bias,
    Flat,
    Science,
    Standard,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Arc => "Arc",
            ProductType::Bias => "Bias",
            ProductType::Flat => "Flat",
            ProductType::Science => "Science",
            ProductType::Standard => "Standard",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Astronomical object class of a target.
///
/// Targets are classified with hierarchical numeric codes; a class matches
/// every code starting with its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Galaxy,
    #[serde(rename = "ISM")]
    InterstellarMatter,
    #[serde(rename = "Solar System Body")]
    SolarSystemBody,
    Star,
    #[serde(rename = "Stellar Cluster")]
    StellarCluster,
    Unknown,
}

impl TargetType {
    /// Prefix of the numeric target type codes belonging to this class.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            TargetType::Galaxy => "15.",
            TargetType::InterstellarMatter => "09.",
            TargetType::SolarSystemBody => "16.",
            TargetType::Star => "14.",
            TargetType::StellarCluster => "12.",
            TargetType::Unknown => "00.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Galaxy => "Galaxy",
            TargetType::InterstellarMatter => "ISM",
            TargetType::SolarSystemBody => "Solar System Body",
            TargetType::Star => "Star",
            TargetType::StellarCluster => "Stellar Cluster",
            TargetType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name resolver used to look up target coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolver {
    #[default]
    Simbad,
    #[serde(rename = "NED")]
    Ned,
    #[serde(rename = "VizieR")]
    Vizier,
}

/// Unit of the cone search radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusUnits {
    #[default]
    Arcseconds,
    Arcminutes,
    Degrees,
}

impl RadiusUnits {
    /// Convert a radius in these units to degrees.
    pub fn to_degrees(&self, radius: f64) -> Degrees {
        match self {
            RadiusUnits::Arcseconds => Arcseconds::new(radius).to::<Degree>(),
            RadiusUnits::Arcminutes => Arcminutes::new(radius).to::<Degree>(),
            RadiusUnits::Degrees => Degrees::new(radius),
        }
    }
}
