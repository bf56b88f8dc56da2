//! Catalog tree for Modelcat.
//!
//! Nodes, model metadata, traversal, and the indexed forest that owns them.

mod forest;
mod metadata;
mod node;
mod traverse;

pub use forest::{Forest, ForestStats};
pub use metadata::{ModelKind, ModelMetadata, ModelStatus, StructureCounts};
pub use node::{NodeKind, TreeNode};
pub use traverse::{collect_forest_models, collect_models, count_by_kind, walk, Walk};
