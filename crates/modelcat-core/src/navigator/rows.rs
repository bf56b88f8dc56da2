//! Flattened rows of the navigator tree.

use super::expansion::ExpansionState;
use crate::catalog::{NodeKind, TreeNode};
use serde::Serialize;

/// Toggle control shown next to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Affordance {
    /// No children: no toggle control.
    Leaf,
    /// Has children, currently hidden.
    Collapsed,
    /// Has children, currently shown.
    Expanded,
}

impl Affordance {
    /// Derive the affordance from the node's children and the expanded set.
    pub fn for_node(node: &TreeNode, expansion: &ExpansionState) -> Self {
        if !node.has_children() {
            Affordance::Leaf
        } else if expansion.is_expanded(node.id()) {
            Affordance::Expanded
        } else {
            Affordance::Collapsed
        }
    }
}

/// One visible line of the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleRow {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub affordance: Affordance,
}

/// Flatten the forest into the rows currently visible.
///
/// Children are emitted only beneath expanded branches; collapsed subtrees
/// are skipped but left intact.
pub fn visible_rows(roots: &[TreeNode], expansion: &ExpansionState) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    for root in roots {
        push_rows(&mut rows, root, 0, expansion);
    }
    rows
}

fn push_rows(rows: &mut Vec<VisibleRow>, node: &TreeNode, depth: usize, expansion: &ExpansionState) {
    let affordance = Affordance::for_node(node, expansion);
    rows.push(VisibleRow {
        id: node.id().to_string(),
        name: node.name.clone(),
        kind: node.kind(),
        depth,
        affordance,
    });

    if affordance == Affordance::Expanded {
        for child in &node.children {
            push_rows(rows, child, depth + 1, expansion);
        }
    }
}
