//! Navigator session: the single owner of view state.

use super::expansion::ExpansionState;
use super::listing::{ModelDetail, ModelRow};
use super::rows::{visible_rows, VisibleRow};
use super::selection::Selection;
use crate::catalog::{collect_models, Forest, TreeNode};
use crate::error::{Error, Result};
use serde::Serialize;

/// What the detail area shows for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum SelectionView {
    /// Nothing selected.
    Empty,
    /// A model is selected: properties panel.
    Detail(ModelDetail),
    /// A branch is selected: every model beneath it.
    Listing { rows: Vec<ModelRow> },
}

/// One interactive navigator over a catalog forest.
#[derive(Debug, Clone)]
pub struct NavigatorSession {
    forest: Forest,
    expansion: ExpansionState,
    selection: Selection,
}

impl NavigatorSession {
    /// Open a session with the default expansion and no selection.
    pub fn new(forest: Forest) -> Self {
        let expansion = ExpansionState::initial(&forest);
        Self {
            forest,
            expansion,
            selection: Selection::new(),
        }
    }

    /// Replace the expansion state.
    pub fn with_expansion(mut self, expansion: ExpansionState) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    /// Flip expansion of `id`; returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        let expanded = self.expansion.toggle(id);
        tracing::trace!(id, expanded, "Toggled node");
        expanded
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Expand every branch in the forest.
    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.forest);
    }

    /// Rows currently visible in the tree.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        visible_rows(self.forest.roots(), &self.expansion)
    }

    /// Select the node with `id`, or clear with `None`.
    ///
    /// Returns whether the selection changed. An unknown id is an error and
    /// leaves the selection as it was.
    pub fn select(&mut self, id: Option<&str>) -> Result<bool> {
        let Some(id) = id else {
            return Ok(self.clear_selection());
        };
        if !self.forest.contains(id) {
            return Err(Error::NodeNotFound(id.to_string()));
        }
        let changed = self.selection.select(id);
        tracing::trace!(id, changed, "Selected node");
        Ok(changed)
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected node, if any.
    pub fn selected(&self) -> Option<&TreeNode> {
        self.selection
            .selected_id()
            .and_then(|id| self.forest.find(id))
    }

    /// Models beneath (or equal to) the selected node.
    pub fn selected_models(&self) -> Vec<&TreeNode> {
        collect_models(self.selected())
    }

    /// Listing rows for the selection.
    pub fn listing(&self) -> Vec<ModelRow> {
        self.selected_models()
            .into_iter()
            .map(ModelRow::from_node)
            .collect()
    }

    /// Detail area content for the selection.
    pub fn view(&self) -> SelectionView {
        match self.selected() {
            None => SelectionView::Empty,
            Some(node) if node.is_model() => {
                let ancestors = self.forest.ancestors(node.id());
                SelectionView::Detail(ModelDetail::new(node, &ancestors))
            }
            Some(_) => SelectionView::Listing {
                rows: self.listing(),
            },
        }
    }
}
