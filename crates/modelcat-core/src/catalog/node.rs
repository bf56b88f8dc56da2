//! Catalog tree nodes.

use super::metadata::ModelMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The level a node occupies in the catalog hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Top-level repository.
    Repository,
    /// Grouping of libraries within a repository.
    Catalog,
    /// Grouping of models within a catalog.
    Library,
    /// A single database design.
    Model,
}

impl NodeKind {
    /// All kinds, outermost first.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Repository,
        NodeKind::Catalog,
        NodeKind::Library,
        NodeKind::Model,
    ];

    /// Lowercase name used in JSON and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Repository => "repository",
            NodeKind::Catalog => "catalog",
            NodeKind::Library => "library",
            NodeKind::Model => "model",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the catalog hierarchy.
///
/// The id and kind are fixed once the node exists; only the name, children,
/// and metadata are open for edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    id: String,
    /// Display label.
    pub name: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    /// Ordered children, owned by this node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Model attributes; by convention only present on model nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ModelMetadata>,
}

impl TreeNode {
    /// Create a node of any kind with no children or metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            metadata: None,
        }
    }

    /// Create a repository node.
    pub fn repository(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Repository)
    }

    /// Create a catalog node.
    pub fn catalog(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Catalog)
    }

    /// Create a library node.
    pub fn library(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Library)
    }

    /// Create a model node carrying metadata.
    pub fn model(id: impl Into<String>, name: impl Into<String>, metadata: ModelMetadata) -> Self {
        Self::new(id, name, NodeKind::Model).with_metadata(metadata)
    }

    /// Append a child.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Hierarchy level.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether this is a model node.
    pub fn is_model(&self) -> bool {
        self.kind == NodeKind::Model
    }

    /// Whether the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Direct child by id.
    pub fn child(&self, id: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.id == id)
    }
}
