//! Projections of selected models for tabular and detail display.

use crate::catalog::{ModelKind, ModelMetadata, ModelStatus, StructureCounts, TreeNode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Action offered on a listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    /// Open the model for editing or checkout.
    Open,
    /// Read-only view: the model is locked or carries no metadata.
    View,
}

impl RowAction {
    fn for_metadata(metadata: Option<&ModelMetadata>) -> Self {
        match metadata.map(|m| m.status) {
            Some(ModelStatus::CheckedIn) | Some(ModelStatus::CheckedOut) => RowAction::Open,
            Some(ModelStatus::Locked) | None => RowAction::View,
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAction::Open => write!(f, "open"),
            RowAction::View => write!(f, "view"),
        }
    }
}

/// One row of the model listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRow {
    pub id: String,
    pub name: String,
    pub model_type: Option<ModelKind>,
    pub database: Option<String>,
    pub version: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub status: Option<ModelStatus>,
    pub checked_out_by: Option<String>,
    pub action: RowAction,
}

impl ModelRow {
    /// Project a model node into a listing row.
    pub fn from_node(node: &TreeNode) -> Self {
        let meta = node.metadata.as_ref();
        Self {
            id: node.id().to_string(),
            name: node.name.clone(),
            model_type: meta.map(|m| m.model_type),
            database: meta.map(|m| m.database.clone()),
            version: meta.map(|m| m.version.clone()),
            last_modified: meta.map(|m| m.last_modified),
            last_modified_by: meta.map(|m| m.last_modified_by.clone()),
            status: meta.map(|m| m.status),
            checked_out_by: meta.and_then(|m| m.checked_out_by.clone()),
            action: RowAction::for_metadata(meta),
        }
    }
}

/// A labelled value in the properties panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub section: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Properties panel for a single selected model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDetail {
    pub id: String,
    pub name: String,
    /// Names from the root down to the parent library.
    pub breadcrumb: Vec<String>,
    pub metadata: Option<ModelMetadata>,
}

impl ModelDetail {
    pub fn new(node: &TreeNode, ancestors: &[&TreeNode]) -> Self {
        Self {
            id: node.id().to_string(),
            name: node.name.clone(),
            breadcrumb: ancestors.iter().map(|n| n.name.clone()).collect(),
            metadata: node.metadata.clone(),
        }
    }

    /// Panel rows in display order. Only general rows appear when the model
    /// has no metadata.
    pub fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            prop("General", "Name", self.name.clone()),
            prop("General", "Id", self.id.clone()),
        ];
        if !self.breadcrumb.is_empty() {
            props.push(prop("General", "Path", self.breadcrumb.join(" / ")));
        }

        let Some(meta) = &self.metadata else {
            return props;
        };

        props.extend([
            prop("General", "Model type", meta.model_type.to_string()),
            prop("General", "Database", meta.database.clone()),
            prop("General", "Description", meta.description.clone()),
            prop("General", "Location", meta.location.clone()),
            prop("Versioning", "Version", meta.version.clone()),
            prop("Versioning", "Status", meta.status.to_string()),
        ]);
        if let Some(owner) = &meta.checked_out_by {
            props.push(prop("Versioning", "Checked out by", owner.clone()));
        }
        props.extend([
            prop("Versioning", "Last modified", format_stamp(&meta.last_modified)),
            prop("Versioning", "Modified by", meta.last_modified_by.clone()),
            prop("Versioning", "Created", format_stamp(&meta.created_date)),
            prop("Versioning", "Created by", meta.created_by.clone()),
        ]);
        props.extend(structure_props(&meta.counts));
        props.push(prop("Tags", "Tags", meta.tags.join(", ")));
        props
    }
}

fn structure_props(counts: &StructureCounts) -> [Property; 4] {
    [
        prop("Structure", "Tables", counts.tables.to_string()),
        prop("Structure", "Views", counts.views.to_string()),
        prop("Structure", "Relationships", counts.relationships.to_string()),
        prop("Structure", "Columns", counts.columns.to_string()),
    ]
}

fn prop(section: &'static str, label: &'static str, value: String) -> Property {
    Property {
        section,
        label,
        value,
    }
}

fn format_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NodeKind;
    use chrono::TimeZone;

    fn meta() -> ModelMetadata {
        let stamp = Utc.with_ymd_and_hms(2024, 5, 6, 14, 0, 0).unwrap();
        ModelMetadata::new(ModelKind::Physical, "PostgreSQL", "1.4.0", stamp, "alice")
            .with_counts(3, 1, 2, 20)
            .with_tags(["billing", "core"])
    }

    #[test]
    fn test_row_from_model() {
        let node = TreeNode::model("m-1", "Invoices", meta().checked_out("bob"));
        let row = ModelRow::from_node(&node);

        assert_eq!(row.name, "Invoices");
        assert_eq!(row.database.as_deref(), Some("PostgreSQL"));
        assert_eq!(row.status, Some(ModelStatus::CheckedOut));
        assert_eq!(row.checked_out_by.as_deref(), Some("bob"));
        assert_eq!(row.action, RowAction::Open);
    }

    #[test]
    fn test_row_actions() {
        let locked = TreeNode::model("m-2", "Ledger", meta().locked());
        assert_eq!(ModelRow::from_node(&locked).action, RowAction::View);

        let bare = TreeNode::new("m-3", "Draft", NodeKind::Model);
        let row = ModelRow::from_node(&bare);
        assert_eq!(row.action, RowAction::View);
        assert!(row.version.is_none());
    }

    #[test]
    fn test_detail_properties() {
        let lib = TreeNode::library("lib", "Billing");
        let node = TreeNode::model("m-1", "Invoices", meta());
        let detail = ModelDetail::new(&node, &[&lib]);
        let props = detail.properties();

        let lookup = |label: &str| {
            props
                .iter()
                .find(|p| p.label == label)
                .map(|p| p.value.clone())
        };
        assert_eq!(lookup("Path").as_deref(), Some("Billing"));
        assert_eq!(lookup("Status").as_deref(), Some("checked-in"));
        assert_eq!(lookup("Last modified").as_deref(), Some("2024-05-06 14:00 UTC"));
        assert_eq!(lookup("Tables").as_deref(), Some("3"));
        assert_eq!(lookup("Tags").as_deref(), Some("billing, core"));
        assert!(lookup("Checked out by").is_none());
    }

    #[test]
    fn test_detail_without_metadata() {
        let node = TreeNode::new("m-3", "Draft", NodeKind::Model);
        let props = ModelDetail::new(&node, &[]).properties();
        let labels: Vec<&str> = props.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Name", "Id"]);
    }
}
