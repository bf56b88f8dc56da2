//! Expanded-node set.

use crate::catalog::{walk, Forest, NodeKind};
use std::collections::BTreeSet;

/// Ids of the nodes currently expanded in the navigator.
///
/// Ids are opaque: toggling an id that is not in the forest is harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    /// Nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default view: the first root and its first catalog.
    pub fn initial(forest: &Forest) -> Self {
        let mut state = Self::new();
        if let Some(root) = forest.roots().first() {
            state.expand(root.id());
            if let Some(catalog) = root
                .children
                .iter()
                .find(|c| c.kind() == NodeKind::Catalog)
            {
                state.expand(catalog.id());
            }
        }
        state
    }

    /// Start from an explicit set of ids.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip membership of `id`. Returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Membership test.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Add `id`. Returns false if it was already expanded.
    pub fn expand(&mut self, id: &str) -> bool {
        self.expanded.insert(id.to_string())
    }

    /// Remove `id`. Returns false if it was not expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    /// Expand every node that has children.
    pub fn expand_all(&mut self, forest: &Forest) {
        for (_, node) in walk(forest.roots()) {
            if node.has_children() {
                self.expanded.insert(node.id().to_string());
            }
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_forest;

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut state = ExpansionState::with_expanded(["a"]);
        let before = state.clone();

        assert!(!state.toggle("a"));
        assert!(state.toggle("a"));
        assert_eq!(state, before);

        assert!(state.toggle("b"));
        assert!(!state.toggle("b"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggles_commute() {
        let mut left = ExpansionState::new();
        left.toggle("x");
        left.toggle("y");

        let mut right = ExpansionState::new();
        right.toggle("y");
        right.toggle("x");

        assert_eq!(left, right);
    }

    #[test]
    fn test_unknown_id_is_harmless() {
        let mut state = ExpansionState::new();
        assert!(!state.collapse("ghost"));
        assert!(state.toggle("ghost"));
        assert!(state.is_expanded("ghost"));
    }

    #[test]
    fn test_initial_expands_root_and_first_catalog() {
        let forest = sample_forest().unwrap();
        let state = ExpansionState::initial(&forest);
        let ids: Vec<&str> = state.ids().collect();
        assert_eq!(ids, vec!["cat-1", "repo-1"]);
    }

    #[test]
    fn test_expand_all_skips_leaves() {
        let forest = sample_forest().unwrap();
        let mut state = ExpansionState::new();
        state.expand_all(&forest);

        assert!(state.is_expanded("lib-1"));
        assert!(!state.is_expanded("lib-4"));
        assert!(!state.is_expanded("model-1"));

        state.collapse_all();
        assert!(state.is_empty());
    }
}
