//! Column identifiers of the archive query engine.

use serde::{Deserialize, Serialize};

use crate::models::TelescopeFacet;

/// Mapping from logical search fields to backend column names.
///
/// Every entry can be overridden from the `[columns]` table of the
/// configuration file; missing entries keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub observation_night: String,
    pub principal_investigator: String,
    pub proposal_code: String,
    pub product_type: String,
    pub rejected: String,
    pub right_ascension: String,
    pub declination: String,
    pub target_type: String,
    pub telescope: String,
    pub instrument: String,
    pub instrument_mode: String,
    pub detector_mode: String,
    pub filter: String,
    pub hrs_mode: String,
    pub rss_fabry_perot_mode: String,
    pub rss_grating: String,
    pub rss_polarimetry_mode: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            observation_night: "night_info.night".to_string(),
            principal_investigator: "proposal_investigator.principal_investigator".to_string(),
            proposal_code: "proposal.proposal_code".to_string(),
            product_type: "product_type.product_type".to_string(),
            rejected: "observation.rejected".to_string(),
            right_ascension: "target.ra".to_string(),
            declination: "target.dec".to_string(),
            target_type: "target_type.numeric_code".to_string(),
            telescope: "telescope.telescope_name".to_string(),
            instrument: "instrument.instrument_name".to_string(),
            instrument_mode: "instrument_setup.instrument_mode".to_string(),
            detector_mode: "instrument_setup.detector_mode".to_string(),
            filter: "instrument_setup.filter".to_string(),
            hrs_mode: "hrs_setup.hrs_mode".to_string(),
            rss_fabry_perot_mode: "rss_setup.fabry_perot_mode".to_string(),
            rss_grating: "rss_setup.grating".to_string(),
            rss_polarimetry_mode: "rss_setup.polarimetry_mode".to_string(),
        }
    }
}

impl ColumnNames {
    /// Column holding the values of a telescope facet.
    pub fn facet(&self, facet: TelescopeFacet) -> &str {
        match facet {
            TelescopeFacet::Telescope => &self.telescope,
            TelescopeFacet::Instrument => &self.instrument,
            TelescopeFacet::InstrumentMode => &self.instrument_mode,
            TelescopeFacet::DetectorMode => &self.detector_mode,
            TelescopeFacet::Filter => &self.filter,
            TelescopeFacet::HrsMode => &self.hrs_mode,
            TelescopeFacet::RssFabryPerotMode => &self.rss_fabry_perot_mode,
            TelescopeFacet::RssGrating => &self.rss_grating,
            TelescopeFacet::RssPolarimetryMode => &self.rss_polarimetry_mode,
        }
    }
}
