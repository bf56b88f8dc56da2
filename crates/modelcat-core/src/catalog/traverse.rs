//! Depth-first traversal over catalog trees.

use super::node::{NodeKind, TreeNode};
use std::collections::HashMap;

/// Collect every model at or below `node`, in pre-order.
///
/// A model node is its own flattening: its children, if any, are never
/// visited. Non-model nodes concatenate the models of their children in
/// order; a branch without models yields nothing.
pub fn collect_models(node: Option<&TreeNode>) -> Vec<&TreeNode> {
    let mut models = Vec::new();
    if let Some(node) = node {
        collect_into(node, &mut models);
    }
    models
}

/// Collect the models of every root, concatenated in root order.
pub fn collect_forest_models(roots: &[TreeNode]) -> Vec<&TreeNode> {
    let mut models = Vec::new();
    for root in roots {
        collect_into(root, &mut models);
    }
    models
}

fn collect_into<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    if node.is_model() {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_into(child, out);
    }
}

/// Pre-order iterator over every node of a forest, children of models
/// included. Yields `(depth, node)` with roots at depth 0.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

/// Walk all nodes of `roots` depth-first.
pub fn walk(roots: &[TreeNode]) -> Walk<'_> {
    Walk {
        stack: roots.iter().rev().map(|n| (0, n)).collect(),
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

/// Number of nodes of each kind in the forest.
pub fn count_by_kind(roots: &[TreeNode]) -> HashMap<NodeKind, usize> {
    let mut counts = HashMap::new();
    for (_, node) in walk(roots) {
        *counts.entry(node.kind()).or_insert(0) += 1;
    }
    counts
}
