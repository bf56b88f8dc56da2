//! Catalog-edit intents proposed by the modeling assistant.
//!
//! Each action kind owns a statically shaped payload; consumers match on the
//! variant instead of inspecting fields. On the wire an action is
//! `{"type": "add_table", "payload": {...}}`. Actions are parsed and described
//! here but never applied to a model.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinality of a relationship between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// One-to-one relation (unique foreign key).
    OneToOne,
    /// One-to-many relation (foreign key on many side).
    OneToMany,
    /// Many-to-many relation (requires a join table).
    ManyToMany,
}

/// Column definition carried by add actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub data_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// Table definition carried by `AddTable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// Relationship definition carried by `AddRelationship`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSpec {
    pub name: String,
    pub source_table_id: String,
    pub source_column_id: String,
    pub target_table_id: String,
    pub target_column_id: String,
    pub cardinality: Cardinality,
}

/// Index definition carried by `AddIndex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    pub table_id: String,
    pub column_ids: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTablePayload {
    pub table: TableSpec,
}

/// Only the fields present are changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTablePayload {
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTablePayload {
    pub table_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddColumnPayload {
    pub table_id: String,
    pub column: ColumnSpec,
}

/// Only the fields present are changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateColumnPayload {
    pub table_id: String,
    pub column_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteColumnPayload {
    pub table_id: String,
    pub column_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRelationshipPayload {
    pub relationship: RelationshipSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRelationshipPayload {
    pub relationship_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRelationshipPayload {
    pub relationship_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddIndexPayload {
    pub index: IndexSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateIndexPayload {
    pub index_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteIndexPayload {
    pub index_id: String,
}

/// A single catalog-edit intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AssistantAction {
    AddTable(AddTablePayload),
    UpdateTable(UpdateTablePayload),
    DeleteTable(DeleteTablePayload),
    AddColumn(AddColumnPayload),
    UpdateColumn(UpdateColumnPayload),
    DeleteColumn(DeleteColumnPayload),
    AddRelationship(AddRelationshipPayload),
    UpdateRelationship(UpdateRelationshipPayload),
    DeleteRelationship(DeleteRelationshipPayload),
    AddIndex(AddIndexPayload),
    UpdateIndex(UpdateIndexPayload),
    DeleteIndex(DeleteIndexPayload),
}

/// What an action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionVerb {
    Add,
    Update,
    Delete,
}

/// What an action touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTarget {
    Table,
    Column,
    Relationship,
    Index,
}

/// Verb and target of an action, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionKind {
    pub verb: ActionVerb,
    pub target: ActionTarget,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.verb {
            ActionVerb::Add => "add",
            ActionVerb::Update => "update",
            ActionVerb::Delete => "delete",
        };
        let target = match self.target {
            ActionTarget::Table => "table",
            ActionTarget::Column => "column",
            ActionTarget::Relationship => "relationship",
            ActionTarget::Index => "index",
        };
        write!(f, "{}_{}", verb, target)
    }
}

impl AssistantAction {
    /// Verb and target of this action.
    pub fn kind(&self) -> ActionKind {
        use ActionTarget::*;
        use ActionVerb::*;
        let (verb, target) = match self {
            AssistantAction::AddTable(_) => (Add, Table),
            AssistantAction::UpdateTable(_) => (Update, Table),
            AssistantAction::DeleteTable(_) => (Delete, Table),
            AssistantAction::AddColumn(_) => (Add, Column),
            AssistantAction::UpdateColumn(_) => (Update, Column),
            AssistantAction::DeleteColumn(_) => (Delete, Column),
            AssistantAction::AddRelationship(_) => (Add, Relationship),
            AssistantAction::UpdateRelationship(_) => (Update, Relationship),
            AssistantAction::DeleteRelationship(_) => (Delete, Relationship),
            AssistantAction::AddIndex(_) => (Add, Index),
            AssistantAction::UpdateIndex(_) => (Update, Index),
            AssistantAction::DeleteIndex(_) => (Delete, Index),
        };
        ActionKind { verb, target }
    }

    pub fn verb(&self) -> ActionVerb {
        self.kind().verb
    }

    pub fn target(&self) -> ActionTarget {
        self.kind().target
    }

    /// The table the action is scoped to, when the payload names one.
    pub fn table_id(&self) -> Option<&str> {
        match self {
            AssistantAction::UpdateTable(p) => Some(&p.table_id),
            AssistantAction::DeleteTable(p) => Some(&p.table_id),
            AssistantAction::AddColumn(p) => Some(&p.table_id),
            AssistantAction::UpdateColumn(p) => Some(&p.table_id),
            AssistantAction::DeleteColumn(p) => Some(&p.table_id),
            AssistantAction::AddRelationship(p) => Some(&p.relationship.source_table_id),
            AssistantAction::AddIndex(p) => Some(&p.index.table_id),
            AssistantAction::AddTable(_)
            | AssistantAction::UpdateRelationship(_)
            | AssistantAction::DeleteRelationship(_)
            | AssistantAction::UpdateIndex(_)
            | AssistantAction::DeleteIndex(_) => None,
        }
    }

    /// One-line human description.
    pub fn summary(&self) -> String {
        match self {
            AssistantAction::AddTable(p) => format!(
                "Add table {} with {} column(s)",
                qualified(p.table.schema.as_deref(), &p.table.name),
                p.table.columns.len()
            ),
            AssistantAction::UpdateTable(p) => match &p.name {
                Some(name) => format!("Rename table {} to {}", p.table_id, name),
                None => format!("Update table {}", p.table_id),
            },
            AssistantAction::DeleteTable(p) => format!("Delete table {}", p.table_id),
            AssistantAction::AddColumn(p) => format!(
                "Add column {} {} to table {}",
                p.column.name, p.column.data_type, p.table_id
            ),
            AssistantAction::UpdateColumn(p) => {
                format!("Update column {} of table {}", p.column_id, p.table_id)
            }
            AssistantAction::DeleteColumn(p) => {
                format!("Delete column {} from table {}", p.column_id, p.table_id)
            }
            AssistantAction::AddRelationship(p) => {
                let r = &p.relationship;
                format!(
                    "Add relationship {} ({}.{} -> {}.{}, {})",
                    r.name,
                    r.source_table_id,
                    r.source_column_id,
                    r.target_table_id,
                    r.target_column_id,
                    cardinality_label(r.cardinality)
                )
            }
            AssistantAction::UpdateRelationship(p) => {
                format!("Update relationship {}", p.relationship_id)
            }
            AssistantAction::DeleteRelationship(p) => {
                format!("Delete relationship {}", p.relationship_id)
            }
            AssistantAction::AddIndex(p) => format!(
                "Add {}index {} on {} ({})",
                if p.index.unique { "unique " } else { "" },
                p.index.name,
                p.index.table_id,
                p.index.column_ids.join(", ")
            ),
            AssistantAction::UpdateIndex(p) => format!("Update index {}", p.index_id),
            AssistantAction::DeleteIndex(p) => format!("Delete index {}", p.index_id),
        }
    }
}

fn qualified(schema: Option<&str>, name: &str) -> String {
    match schema {
        Some(schema) => format!("{}.{}", schema, name),
        None => name.to_string(),
    }
}

fn cardinality_label(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::OneToOne => "1:1",
        Cardinality::OneToMany => "1:N",
        Cardinality::ManyToMany => "N:M",
    }
}

/// Parse one action or an array of actions from JSON.
pub fn parse_actions(json: &str) -> Result<Vec<AssistantAction>> {
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str(json)?)
    } else {
        Ok(vec![serde_json::from_str(json)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_payload() {
        let json = r#"{
            "type": "add_column",
            "payload": {
                "table_id": "tbl-customer",
                "column": { "name": "email", "data_type": "VARCHAR(255)", "nullable": false }
            }
        }"#;
        let actions = parse_actions(json).unwrap();
        assert_eq!(actions.len(), 1);

        let AssistantAction::AddColumn(payload) = &actions[0] else {
            panic!("expected AddColumn, got {:?}", actions[0]);
        };
        assert_eq!(payload.column.name, "email");
        assert!(!payload.column.nullable);
        assert!(!payload.column.primary_key);
        assert_eq!(actions[0].table_id(), Some("tbl-customer"));
        assert_eq!(actions[0].kind().to_string(), "add_column");
    }

    #[test]
    fn test_parse_batch() {
        let json = r#"[
            {"type": "delete_index", "payload": {"index_id": "idx-1"}},
            {"type": "add_index", "payload": {"index": {
                "name": "ux_email", "table_id": "tbl-customer",
                "column_ids": ["col-email"], "unique": true
            }}},
            {"type": "update_table", "payload": {"table_id": "tbl-order", "name": "orders"}}
        ]"#;
        let actions = parse_actions(json).unwrap();
        let summaries: Vec<String> = actions.iter().map(|a| a.summary()).collect();
        assert_eq!(
            summaries,
            vec![
                "Delete index idx-1",
                "Add unique index ux_email on tbl-customer (col-email)",
                "Rename table tbl-order to orders",
            ]
        );
        assert_eq!(actions[0].verb(), ActionVerb::Delete);
        assert_eq!(actions[1].target(), ActionTarget::Index);
    }

    #[test]
    fn test_payload_shape_is_enforced() {
        // delete_table requires table_id; a column payload does not fit.
        let json = r#"{"type": "delete_table", "payload": {"column_id": "c"}}"#;
        assert!(parse_actions(json).is_err());

        let json = r#"{"type": "drop_everything", "payload": {}}"#;
        assert!(parse_actions(json).is_err());
    }

    #[test]
    fn test_payload_error_names_missing_field() {
        let json = r#"[{"type": "delete_table", "payload": {"table": "x"}}]"#;
        let message = parse_actions(json).unwrap_err().to_string();
        assert!(message.contains("table_id"), "{message}");
        assert!(message.contains("line"), "{message}");

        let json = r#"{"type": "delete_table", "payload": {"table": "x"}}"#;
        let message = parse_actions(json).unwrap_err().to_string();
        assert!(message.contains("table_id"), "{message}");
    }

    #[test]
    fn test_serialize_wire_shape() {
        let action = AssistantAction::AddRelationship(AddRelationshipPayload {
            relationship: RelationshipSpec {
                name: "customer_orders".into(),
                source_table_id: "tbl-customer".into(),
                source_column_id: "col-id".into(),
                target_table_id: "tbl-order".into(),
                target_column_id: "col-customer-id".into(),
                cardinality: Cardinality::OneToMany,
            },
        });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "add_relationship");
        assert_eq!(json["payload"]["relationship"]["cardinality"], "one_to_many");
        assert_eq!(
            action.summary(),
            "Add relationship customer_orders (tbl-customer.col-id -> tbl-order.col-customer-id, 1:N)"
        );
    }
}
