//! Indexed catalog forest.
//!
//! A `Forest` owns the root nodes and an id index built once at construction.
//! Construction validates the invariants the navigator relies on: at least one
//! root, unique non-empty ids, and an owner for every checked-out model.

use super::node::{NodeKind, TreeNode};
use super::traverse::{collect_forest_models, count_by_kind, walk};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// A validated forest of catalog trees.
#[derive(Debug, Clone)]
pub struct Forest {
    roots: Vec<TreeNode>,
    /// Child-index path from the root slice to each node.
    index: HashMap<String, Vec<usize>>,
}

/// Node counts and shape of a forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ForestStats {
    pub repositories: usize,
    pub catalogs: usize,
    pub libraries: usize,
    pub models: usize,
    pub total_nodes: usize,
    /// Depth of the deepest node; roots are depth 0.
    pub max_depth: usize,
}

impl Forest {
    /// Validate `roots` and build the id index.
    pub fn new(roots: Vec<TreeNode>) -> Result<Self> {
        if roots.is_empty() {
            return Err(Error::EmptyForest);
        }

        let mut index = HashMap::new();
        for (position, root) in roots.iter().enumerate() {
            let mut path = vec![position];
            index_node(root, &mut path, &mut index)?;
        }

        tracing::debug!(
            roots = roots.len(),
            nodes = index.len(),
            "Catalog forest indexed"
        );

        Ok(Self { roots, index })
    }

    /// Parse a forest from JSON: an array of roots or a single root object.
    ///
    /// The leading bracket picks the form, so a malformed node reports
    /// serde's own error with its field and position.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim_start().starts_with('[') {
            Self::new(serde_json::from_str(json)?)
        } else {
            Self::new(vec![serde_json::from_str(json)?])
        }
    }

    /// Parse a forest from a JSON reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Load a forest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        tracing::debug!(path = %path.display(), "Loading catalog forest");
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Serialize the roots as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.roots)?)
    }

    /// Root nodes in order.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// A forest is never empty once constructed.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether a node with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        let path = self.index.get(id)?;
        self.resolve(path)
    }

    /// Nodes from the root down to the parent of `id`.
    ///
    /// Empty for roots and unknown ids.
    pub fn ancestors(&self, id: &str) -> Vec<&TreeNode> {
        let Some(path) = self.index.get(id) else {
            return Vec::new();
        };
        (1..path.len())
            .filter_map(|len| self.resolve(&path[..len]))
            .collect()
    }

    /// Every model in the forest, in pre-order.
    pub fn models(&self) -> Vec<&TreeNode> {
        collect_forest_models(&self.roots)
    }

    /// Count nodes by kind and measure depth.
    pub fn stats(&self) -> ForestStats {
        let counts = count_by_kind(&self.roots);
        let count = |kind: NodeKind| counts.get(&kind).copied().unwrap_or(0);
        ForestStats {
            repositories: count(NodeKind::Repository),
            catalogs: count(NodeKind::Catalog),
            libraries: count(NodeKind::Library),
            models: count(NodeKind::Model),
            total_nodes: self.index.len(),
            max_depth: walk(&self.roots).map(|(depth, _)| depth).max().unwrap_or(0),
        }
    }

    fn resolve(&self, path: &[usize]) -> Option<&TreeNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for position in rest {
            node = node.children.get(*position)?;
        }
        Some(node)
    }
}

fn index_node(
    node: &TreeNode,
    path: &mut Vec<usize>,
    index: &mut HashMap<String, Vec<usize>>,
) -> Result<()> {
    if node.id().trim().is_empty() {
        return Err(Error::EmptyId(node.name.clone()));
    }
    if index.contains_key(node.id()) {
        return Err(Error::DuplicateId(node.id().to_string()));
    }
    if let Some(metadata) = &node.metadata {
        metadata.validate(node.id())?;
        if !node.is_model() {
            tracing::debug!(id = node.id(), kind = %node.kind(), "Metadata on non-model node");
        }
    }
    if node.is_model() && node.has_children() {
        tracing::debug!(
            id = node.id(),
            children = node.children.len(),
            "Model node has children; they are excluded from model listings"
        );
    }

    index.insert(node.id().to_string(), path.clone());

    for (position, child) in node.children.iter().enumerate() {
        path.push(position);
        index_node(child, path, index)?;
        path.pop();
    }
    Ok(())
}
