//! Mapping of validated search parameters to a where-condition tree.
//!
//! The builders are the last line of defence: they parse the raw field text
//! again and fail with a [`QueryError`] if it does not parse, since by this
//! point the caller must already have checked `is_error(..)` is false.

use log::debug;

use super::columns::ColumnNames;
use super::error::{QueryError, QueryResult};
use super::node::{ConditionNode, ConeCondition, SkyPoint};
use super::prune::prune;
use crate::config::QueryConfig;
use crate::models::{
    GeneralQueryParameters, RadiusUnits, TargetQueryParameters, TelescopeFacet,
    TelescopeQueryParameters,
};
use crate::parsing::{
    parse_date, parse_decimal, parse_declination, parse_range, parse_right_ascension, Declination,
    InputField, Range, RightAscension,
};

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Builds where conditions with a given column table and night convention.
///
/// # Examples
///
/// ```
/// use archive_query::conditions::ConditionBuilder;
/// use archive_query::models::GeneralQueryParameters;
///
/// let builder = ConditionBuilder::default();
/// let mut general = GeneralQueryParameters::default();
/// general.set_proposal_code("2019-1-SCI");
///
/// let condition = builder.general(&general).unwrap();
/// assert_eq!(condition.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConditionBuilder {
    config: QueryConfig,
}

impl ConditionBuilder {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    fn columns(&self) -> &ColumnNames {
        &self.config.columns
    }

    /// Observation night, proposal and data category conditions.
    ///
    /// A night `D` becomes `night >= D 14:00` and `night <= (D + 1) 14:00` in
    /// observatory time; a range `D1 .. D2` spans from the start of `D1` to the
    /// end of `D2`.
    pub fn general(&self, general: &GeneralQueryParameters) -> QueryResult<ConditionNode> {
        let columns = self.columns();
        let mut conditions = Vec::new();

        if let Some(night) = non_blank(&general.observation_night) {
            let range = parse_range(night, InputField::Date, parse_date)
                .map_err(QueryError::invalid_field("observation night"))?;
            let (first, last) = match range {
                Range::Single(date) => (date, date),
                Range::Between(start, end) if start > end => {
                    return Err(QueryError::ReversedDateRange { start, end });
                }
                Range::Between(start, end) => (start, end),
            };
            let night_convention = self.config.night;
            let start = night_convention.start_of(first)?;
            let end = night_convention.end_of(last)?;
            conditions.push(ConditionNode::greater_equal(
                columns.observation_night.as_str(),
                start.to_rfc3339(),
            ));
            conditions.push(ConditionNode::less_equal(
                columns.observation_night.as_str(),
                end.to_rfc3339(),
            ));
        }

        if let Some(pi) = non_blank(&general.principal_investigator) {
            conditions.push(ConditionNode::contains(
                columns.principal_investigator.as_str(),
                pi,
            ));
        }

        if let Some(code) = non_blank(&general.proposal_code) {
            conditions.push(ConditionNode::contains(columns.proposal_code.as_str(), code));
        }

        if !general.product_types.is_empty() {
            conditions.push(ConditionNode::Or(
                general
                    .product_types
                    .iter()
                    .map(|product_type| {
                        ConditionNode::equals(columns.product_type.as_str(), product_type.as_str())
                    })
                    .collect(),
            ));
        }

        if let Some(rejected) = general.rejected {
            conditions.push(ConditionNode::equals(columns.rejected.as_str(), rejected));
        }

        Ok(ConditionNode::And(conditions))
    }

    /// Position and target type conditions.
    ///
    /// A right ascension range with `low > high` crosses 0° and becomes
    /// `ra >= low OR ra <= high`. Declination ranges are reordered. A cone
    /// search is produced only for a single right ascension and declination
    /// together with a radius; a lone coordinate constrains nothing.
    pub fn target(&self, target: &TargetQueryParameters) -> QueryResult<ConditionNode> {
        let columns = self.columns();
        let mut conditions = Vec::new();

        let right_ascension = non_blank(&target.right_ascension)
            .map(|value| parse_range(value, InputField::RightAscension, parse_right_ascension))
            .transpose()
            .map_err(QueryError::invalid_field("right ascension"))?;
        let declination = non_blank(&target.declination)
            .map(|value| parse_range(value, InputField::Declination, parse_declination))
            .transpose()
            .map_err(QueryError::invalid_field("declination"))?;
        let radius = non_blank(&target.search_cone_radius);

        match (right_ascension, declination, radius) {
            (Some(Range::Single(ra)), Some(Range::Single(dec)), Some(radius)) => {
                conditions.push(self.cone(ra, dec, radius, target.search_cone_radius_units)?);
            }
            (right_ascension, declination, radius) => {
                if let Some(radius) = radius {
                    debug!(
                        "Ignoring search cone radius {:?}: a cone needs a single right ascension and declination",
                        radius
                    );
                }
                if let Some(Range::Between(low, high)) = right_ascension {
                    self.push_right_ascension_range(&mut conditions, low, high);
                }
                if let Some(Range::Between(first, second)) = declination {
                    self.push_declination_range(&mut conditions, first, second);
                }
            }
        }

        if !target.target_types.is_empty() {
            conditions.push(ConditionNode::Or(
                target
                    .target_types
                    .iter()
                    .map(|target_type| {
                        ConditionNode::starts_with(
                            columns.target_type.as_str(),
                            target_type.code_prefix(),
                        )
                    })
                    .collect(),
            ));
        }

        Ok(ConditionNode::And(conditions))
    }

    fn cone(
        &self,
        ra: RightAscension,
        dec: Declination,
        radius: &str,
        units: RadiusUnits,
    ) -> QueryResult<ConditionNode> {
        let value = parse_decimal(radius)
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| QueryError::InvalidRadius {
                value: radius.to_string(),
            })?;
        let columns = self.columns();
        Ok(ConditionNode::WithinRadius(ConeCondition {
            right_ascension_column: columns.right_ascension.clone(),
            declination_column: columns.declination.clone(),
            center: SkyPoint {
                right_ascension: ra.degrees(),
                declination: dec.degrees(),
            },
            radius: units.to_degrees(value).value(),
        }))
    }

    fn push_right_ascension_range(
        &self,
        conditions: &mut Vec<ConditionNode>,
        low: RightAscension,
        high: RightAscension,
    ) {
        let column = self.columns().right_ascension.as_str();
        let lower = ConditionNode::greater_equal(column, low.degrees());
        let upper = ConditionNode::less_equal(column, high.degrees());
        if low.degrees() <= high.degrees() {
            conditions.push(lower);
            conditions.push(upper);
        } else {
            conditions.push(ConditionNode::Or(vec![lower, upper]));
        }
    }

    fn push_declination_range(
        &self,
        conditions: &mut Vec<ConditionNode>,
        first: Declination,
        second: Declination,
    ) {
        let column = self.columns().declination.as_str();
        let (low, high) = if first.degrees() <= second.degrees() {
            (first.degrees(), second.degrees())
        } else {
            (second.degrees(), first.degrees())
        };
        conditions.push(ConditionNode::greater_equal(column, low));
        conditions.push(ConditionNode::less_equal(column, high));
    }

    /// Telescope and instrument setup conditions.
    ///
    /// A facet that is empty or contains "All" contributes nothing; any other
    /// facet becomes an `OR` of equality tests over its values.
    pub fn telescope(&self, telescope: &TelescopeQueryParameters) -> ConditionNode {
        let columns = self.columns();
        let conditions = TelescopeFacet::ALL
            .iter()
            .filter_map(|&facet| {
                let values = telescope.restriction(facet)?;
                let column = columns.facet(facet);
                Some(ConditionNode::Or(
                    values
                        .iter()
                        .map(|value| ConditionNode::equals(column, value.as_str()))
                        .collect(),
                ))
            })
            .collect();
        ConditionNode::And(conditions)
    }

    /// The full, unpruned where condition: an `AND` of the general, target and
    /// telescope conditions. A missing telescope group contributes
    /// [`ConditionNode::Empty`].
    pub fn where_condition(
        &self,
        general: &GeneralQueryParameters,
        target: &TargetQueryParameters,
        telescope: Option<&TelescopeQueryParameters>,
    ) -> QueryResult<ConditionNode> {
        let condition = ConditionNode::And(vec![
            self.general(general)?,
            self.target(target)?,
            telescope.map_or(ConditionNode::Empty, |t| self.telescope(t)),
        ]);
        debug!("Built where condition: {:?}", condition);
        Ok(condition)
    }

    /// [`where_condition`](Self::where_condition) followed by [`prune`].
    ///
    /// `Ok(None)` means the query has no constraint and matches everything.
    pub fn search_condition(
        &self,
        general: &GeneralQueryParameters,
        target: &TargetQueryParameters,
        telescope: Option<&TelescopeQueryParameters>,
    ) -> QueryResult<Option<ConditionNode>> {
        let condition = self.where_condition(general, target, telescope)?;
        Ok(prune(&condition))
    }
}

/// General conditions with the default configuration.
pub fn general_where_condition(general: &GeneralQueryParameters) -> QueryResult<ConditionNode> {
    ConditionBuilder::default().general(general)
}

/// Target conditions with the default configuration.
pub fn target_where_condition(target: &TargetQueryParameters) -> QueryResult<ConditionNode> {
    ConditionBuilder::default().target(target)
}

/// Telescope conditions with the default configuration.
pub fn telescope_where_condition(telescope: &TelescopeQueryParameters) -> ConditionNode {
    ConditionBuilder::default().telescope(telescope)
}

/// The unpruned where condition with the default configuration.
pub fn where_condition(
    general: &GeneralQueryParameters,
    target: &TargetQueryParameters,
    telescope: Option<&TelescopeQueryParameters>,
) -> QueryResult<ConditionNode> {
    ConditionBuilder::default().where_condition(general, target, telescope)
}
