//! The where-condition tree.
//!
//! A closed sum type replaces the loosely keyed objects the query engine
//! reads. The serde representation is the engine's wire shape: leaves
//! serialize as `{"<OPERATOR>": {"column": .., "value": ..}}`, composites as
//! `{"AND": [..]}` / `{"OR": [..]}`.

use serde::{Deserialize, Serialize};

/// A scalar or list value compared against a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    List(Vec<ConditionValue>),
}

impl ConditionValue {
    /// Whether the value carries no constraint: blank text, a non-finite
    /// number, or a list of such values.
    pub fn is_empty(&self) -> bool {
        match self {
            ConditionValue::Boolean(_) => false,
            ConditionValue::Number(n) => !n.is_finite(),
            ConditionValue::Text(s) => s.trim().is_empty(),
            ConditionValue::List(values) => values.iter().all(ConditionValue::is_empty),
        }
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        ConditionValue::Boolean(value)
    }
}

impl From<f64> for ConditionValue {
    fn from(value: f64) -> Self {
        ConditionValue::Number(value)
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        ConditionValue::Text(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        ConditionValue::Text(value)
    }
}

/// Column and value of a leaf comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub column: String,
    pub value: ConditionValue,
}

/// A sky position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyPoint {
    pub right_ascension: f64,
    pub declination: f64,
}

/// A cone search around `center` with a radius in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConeCondition {
    pub right_ascension_column: String,
    pub declination_column: String,
    pub center: SkyPoint,
    pub radius: f64,
}

/// A node of the where-condition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionNode {
    And(Vec<ConditionNode>),
    Or(Vec<ConditionNode>),
    Equals(Comparison),
    LessThan(Comparison),
    GreaterThan(Comparison),
    GreaterEqual(Comparison),
    LessEqual(Comparison),
    Contains(Comparison),
    StartsWith(Comparison),
    WithinRadius(ConeCondition),
    /// No constraint. Removed by pruning.
    Empty,
}

fn comparison(column: impl Into<String>, value: impl Into<ConditionValue>) -> Comparison {
    Comparison {
        column: column.into(),
        value: value.into(),
    }
}

impl ConditionNode {
    pub fn equals(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::Equals(comparison(column, value))
    }

    pub fn less_than(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::LessThan(comparison(column, value))
    }

    pub fn greater_than(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::GreaterThan(comparison(column, value))
    }

    pub fn greater_equal(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::GreaterEqual(comparison(column, value))
    }

    pub fn less_equal(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::LessEqual(comparison(column, value))
    }

    pub fn contains(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::Contains(comparison(column, value))
    }

    pub fn starts_with(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        ConditionNode::StartsWith(comparison(column, value))
    }

    /// The column and value of a leaf comparison, `None` for other nodes.
    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            ConditionNode::Equals(c)
            | ConditionNode::LessThan(c)
            | ConditionNode::GreaterThan(c)
            | ConditionNode::GreaterEqual(c)
            | ConditionNode::LessEqual(c)
            | ConditionNode::Contains(c)
            | ConditionNode::StartsWith(c) => Some(c),
            ConditionNode::And(_)
            | ConditionNode::Or(_)
            | ConditionNode::WithinRadius(_)
            | ConditionNode::Empty => None,
        }
    }

    /// Child nodes of `And`/`Or`; empty for everything else.
    pub fn children(&self) -> &[ConditionNode] {
        match self {
            ConditionNode::And(children) | ConditionNode::Or(children) => children,
            _ => &[],
        }
    }
}
