//! Removal of empty branches from a condition tree.

use super::node::ConditionNode;

/// Prune empty branches from `node`.
///
/// `And`/`Or` nodes left without children, leaves with an empty value and
/// [`ConditionNode::Empty`] markers are removed, bottom-up. `None` means the
/// whole tree was empty: no constraint, match everything. Pruning is
/// idempotent.
///
/// # Examples
///
/// ```
/// use archive_query::conditions::{prune, ConditionNode};
///
/// let tree = ConditionNode::And(vec![
///     ConditionNode::And(vec![]),
///     ConditionNode::Empty,
///     ConditionNode::contains("proposal.proposal_code", ""),
/// ]);
/// assert_eq!(prune(&tree), None);
/// ```
pub fn prune(node: &ConditionNode) -> Option<ConditionNode> {
    match node {
        ConditionNode::And(children) => prune_children(children).map(ConditionNode::And),
        ConditionNode::Or(children) => prune_children(children).map(ConditionNode::Or),
        ConditionNode::WithinRadius(cone) => {
            let finite = cone.radius.is_finite()
                && cone.center.right_ascension.is_finite()
                && cone.center.declination.is_finite();
            finite.then(|| node.clone())
        }
        ConditionNode::Empty => None,
        ConditionNode::Equals(c)
        | ConditionNode::LessThan(c)
        | ConditionNode::GreaterThan(c)
        | ConditionNode::GreaterEqual(c)
        | ConditionNode::LessEqual(c)
        | ConditionNode::Contains(c)
        | ConditionNode::StartsWith(c) => (!c.value.is_empty()).then(|| node.clone()),
    }
}

fn prune_children(children: &[ConditionNode]) -> Option<Vec<ConditionNode>> {
    let kept: Vec<ConditionNode> = children.iter().filter_map(prune).collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept)
    }
}
