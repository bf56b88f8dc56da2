//! Modelcat Core - catalog tree, navigator state, and assistant actions.
//!
//! The catalog is a forest of typed nodes (repository, catalog, library,
//! model). A [`NavigatorSession`] owns one forest together with the
//! expansion and selection state of a single interactive view.

pub mod actions;
pub mod catalog;
pub mod error;
pub mod navigator;
pub mod sample;

pub use actions::{parse_actions, ActionKind, ActionTarget, ActionVerb, AssistantAction};
pub use catalog::{
    collect_forest_models, collect_models, walk, Forest, ForestStats, ModelKind, ModelMetadata,
    ModelStatus, NodeKind, StructureCounts, TreeNode,
};
pub use error::{Error, Result};
pub use navigator::{
    Affordance, ExpansionState, ModelDetail, ModelRow, NavigatorSession, Property, RowAction,
    Selection, SelectionView, VisibleRow,
};
pub use sample::sample_forest;
