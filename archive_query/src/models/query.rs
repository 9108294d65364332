//! Search form parameter groups.
//!
//! Each group is created empty when a search form is opened, updated field by
//! field as the user types (each setter re-validates only the edited field),
//! validated exhaustively with `validate()` before submission, and then handed
//! read-only to the condition builders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::{ProductType, RadiusUnits, Resolver, TargetType};
use crate::validation::{
    validate_date, validate_declination, validate_right_ascension, validate_search_cone_radius,
    FieldErrors,
};

/// Normalise a text field: surrounding whitespace is dropped and blank input
/// becomes `None`.
fn normalize(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_optional(value: &Option<String>, validator: fn(&str) -> Option<String>) -> Option<String> {
    value.as_deref().and_then(validator)
}

// ==================== General ====================

/// Validation messages of [`GeneralQueryParameters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_night: Option<String>,
}

impl FieldErrors for GeneralErrors {
    fn messages(&self) -> Vec<Option<&str>> {
        vec![self.observation_night.as_deref()]
    }
}

/// Observation night, proposal and data category filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralQueryParameters {
    /// A date or date range (`YYYY-MM-DD .. YYYY-MM-DD`).
    #[serde(default)]
    pub observation_night: Option<String>,
    #[serde(default)]
    pub principal_investigator: Option<String>,
    #[serde(default)]
    pub proposal_code: Option<String>,
    #[serde(default)]
    pub product_types: BTreeSet<ProductType>,
    #[serde(default)]
    pub rejected: Option<bool>,
    #[serde(default)]
    pub errors: GeneralErrors,
}

impl GeneralQueryParameters {
    pub fn set_observation_night(&mut self, value: impl Into<String>) {
        self.observation_night = normalize(value);
        self.errors.observation_night = validate_optional(&self.observation_night, validate_date);
    }

    pub fn set_principal_investigator(&mut self, value: impl Into<String>) {
        self.principal_investigator = normalize(value);
    }

    pub fn set_proposal_code(&mut self, value: impl Into<String>) {
        self.proposal_code = normalize(value);
    }

    /// Refresh every field's error. Returns `true` if all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.errors.observation_night = validate_optional(&self.observation_night, validate_date);
        !self.errors.has_errors()
    }
}

// ==================== Target ====================

/// Validation messages of [`TargetQueryParameters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_ascension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_cone_radius: Option<String>,
}

impl FieldErrors for TargetErrors {
    fn messages(&self) -> Vec<Option<&str>> {
        vec![
            self.right_ascension.as_deref(),
            self.declination.as_deref(),
            self.search_cone_radius.as_deref(),
        ]
    }
}

/// Target name, position and classification filters.
///
/// `name` and `resolver` drive the external name lookup that fills in the
/// coordinates; they do not constrain the query themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetQueryParameters {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub resolver: Resolver,
    #[serde(default)]
    pub right_ascension: Option<String>,
    #[serde(default)]
    pub declination: Option<String>,
    #[serde(default)]
    pub search_cone_radius: Option<String>,
    #[serde(default)]
    pub search_cone_radius_units: RadiusUnits,
    #[serde(default)]
    pub target_types: BTreeSet<TargetType>,
    #[serde(default)]
    pub errors: TargetErrors,
}

impl TargetQueryParameters {
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = normalize(value);
    }

    pub fn set_right_ascension(&mut self, value: impl Into<String>) {
        self.right_ascension = normalize(value);
        self.errors.right_ascension =
            validate_optional(&self.right_ascension, validate_right_ascension);
    }

    pub fn set_declination(&mut self, value: impl Into<String>) {
        self.declination = normalize(value);
        self.errors.declination = validate_optional(&self.declination, validate_declination);
    }

    pub fn set_search_cone_radius(&mut self, value: impl Into<String>) {
        self.search_cone_radius = normalize(value);
        self.errors.search_cone_radius =
            validate_optional(&self.search_cone_radius, validate_search_cone_radius);
    }

    /// Refresh every field's error. Returns `true` if all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.errors.right_ascension =
            validate_optional(&self.right_ascension, validate_right_ascension);
        self.errors.declination = validate_optional(&self.declination, validate_declination);
        self.errors.search_cone_radius =
            validate_optional(&self.search_cone_radius, validate_search_cone_radius);
        !self.errors.has_errors()
    }
}

// ==================== Telescope ====================

/// Facet value meaning "no restriction".
pub const ALL_VALUE: &str = "All";

/// Telescope and instrument setup facets.
///
/// Each facet lists the selected values. An empty facet, or one containing
/// [`ALL_VALUE`], does not restrict the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TelescopeQueryParameters {
    pub telescopes: Vec<String>,
    pub instruments: Vec<String>,
    pub instrument_modes: Vec<String>,
    pub detector_modes: Vec<String>,
    pub filters: Vec<String>,
    pub hrs_modes: Vec<String>,
    pub rss_fabry_perot_modes: Vec<String>,
    pub rss_gratings: Vec<String>,
    pub rss_polarimetry_modes: Vec<String>,
}

/// Telescope facet selectors, in the order they appear in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelescopeFacet {
    Telescope,
    Instrument,
    InstrumentMode,
    DetectorMode,
    Filter,
    HrsMode,
    RssFabryPerotMode,
    RssGrating,
    RssPolarimetryMode,
}

impl TelescopeFacet {
    pub const ALL: [TelescopeFacet; 9] = [
        TelescopeFacet::Telescope,
        TelescopeFacet::Instrument,
        TelescopeFacet::InstrumentMode,
        TelescopeFacet::DetectorMode,
        TelescopeFacet::Filter,
        TelescopeFacet::HrsMode,
        TelescopeFacet::RssFabryPerotMode,
        TelescopeFacet::RssGrating,
        TelescopeFacet::RssPolarimetryMode,
    ];
}

impl TelescopeQueryParameters {
    /// Selected values of a facet.
    pub fn facet(&self, facet: TelescopeFacet) -> &[String] {
        match facet {
            TelescopeFacet::Telescope => &self.telescopes,
            TelescopeFacet::Instrument => &self.instruments,
            TelescopeFacet::InstrumentMode => &self.instrument_modes,
            TelescopeFacet::DetectorMode => &self.detector_modes,
            TelescopeFacet::Filter => &self.filters,
            TelescopeFacet::HrsMode => &self.hrs_modes,
            TelescopeFacet::RssFabryPerotMode => &self.rss_fabry_perot_modes,
            TelescopeFacet::RssGrating => &self.rss_gratings,
            TelescopeFacet::RssPolarimetryMode => &self.rss_polarimetry_modes,
        }
    }

    /// The values restricting a facet, or `None` if the facet is unrestricted
    /// (empty, or containing [`ALL_VALUE`] alongside anything else).
    pub fn restriction(&self, facet: TelescopeFacet) -> Option<&[String]> {
        let values = self.facet(facet);
        if values.is_empty() || values.iter().any(|v| v == ALL_VALUE) {
            None
        } else {
            Some(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_refreshes_only_edited_field() {
        let mut target = TargetQueryParameters::default();
        target.errors.declination = Some("stale".to_string());

        target.set_right_ascension("25:00:00");
        assert!(target.errors.right_ascension.as_deref().unwrap().contains("hours: 25"));
        assert_eq!(target.errors.declination.as_deref(), Some("stale"));

        target.set_right_ascension("12:00:00");
        assert_eq!(target.errors.right_ascension, None);
        assert_eq!(target.right_ascension.as_deref(), Some("12:00:00"));
    }

    #[test]
    fn test_validate_catches_untouched_fields() {
        let mut target = TargetQueryParameters {
            declination: Some("370".to_string()),
            search_cone_radius: Some("-2".to_string()),
            ..Default::default()
        };
        assert!(!target.validate());
        assert!(target.errors.declination.is_some());
        assert!(target.errors.search_cone_radius.is_some());
        assert_eq!(target.errors.right_ascension, None);
    }

    #[test]
    fn test_blank_input_clears_field() {
        let mut general = GeneralQueryParameters::default();
        general.set_observation_night("2019-02-30");
        assert!(general.errors.has_errors());
        general.set_observation_night("   ");
        assert_eq!(general.observation_night, None);
        assert!(!general.errors.has_errors());
        assert!(general.validate());
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let mut general = GeneralQueryParameters::default();
        general.set_principal_investigator("  Smith ");
        general.set_proposal_code("2019-1-SCI-005");
        assert_eq!(general.principal_investigator.as_deref(), Some("Smith"));
        assert_eq!(general.proposal_code.as_deref(), Some("2019-1-SCI-005"));
    }

    #[test]
    fn test_all_dominates_facet() {
        let telescope = TelescopeQueryParameters {
            instruments: vec!["RSS".to_string(), ALL_VALUE.to_string()],
            telescopes: vec!["SALT".to_string()],
            ..Default::default()
        };
        assert_eq!(telescope.restriction(TelescopeFacet::Instrument), None);
        assert_eq!(telescope.restriction(TelescopeFacet::Filter), None);
        assert_eq!(
            telescope.restriction(TelescopeFacet::Telescope),
            Some(&["SALT".to_string()][..])
        );
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "rightAscension": "10 .. 20",
            "searchConeRadiusUnits": "arcminutes",
            "targetTypes": ["Star", "Galaxy"]
        }"#;
        let target: TargetQueryParameters = serde_json::from_str(json).unwrap();
        assert_eq!(target.right_ascension.as_deref(), Some("10 .. 20"));
        assert_eq!(target.search_cone_radius_units, RadiusUnits::Arcminutes);
        assert_eq!(target.resolver, Resolver::Simbad);
        assert_eq!(target.target_types.len(), 2);
        assert_eq!(target.errors, TargetErrors::default());
    }
}
