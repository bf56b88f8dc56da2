//! Descriptive attributes of model nodes.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of database design a model represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Engine-independent entity model.
    Logical,
    /// Engine-specific table design.
    Physical,
    /// Star/snowflake schema for analytics.
    Dimensional,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Logical => write!(f, "logical"),
            ModelKind::Physical => write!(f, "physical"),
            ModelKind::Dimensional => write!(f, "dimensional"),
        }
    }
}

/// Lifecycle status of a model in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelStatus {
    /// Available for checkout.
    CheckedIn,
    /// Exclusively held for editing by one user.
    CheckedOut,
    /// Administratively locked.
    Locked,
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelStatus::CheckedIn => write!(f, "checked-in"),
            ModelStatus::CheckedOut => write!(f, "checked-out"),
            ModelStatus::Locked => write!(f, "locked"),
        }
    }
}

/// Structural counts of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructureCounts {
    pub tables: u32,
    pub views: u32,
    pub relationships: u32,
    pub columns: u32,
}

/// Metadata record attached to a model node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    /// Logical, physical, or dimensional.
    pub model_type: ModelKind,
    /// Target database engine.
    pub database: String,
    /// Semantic version string, kept verbatim.
    pub version: String,
    pub last_modified: DateTime<Utc>,
    pub last_modified_by: String,
    pub status: ModelStatus,
    /// Set whenever `status` is checked-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_out_by: Option<String>,
    #[serde(flatten)]
    pub counts: StructureCounts,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    /// Path-like location inside the repository.
    #[serde(default)]
    pub location: String,
    /// Free-form tags; order kept, duplicates allowed.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ModelMetadata {
    /// Create checked-in metadata. The creation stamp defaults to the
    /// modification stamp.
    pub fn new(
        model_type: ModelKind,
        database: impl Into<String>,
        version: impl Into<String>,
        last_modified: DateTime<Utc>,
        last_modified_by: impl Into<String>,
    ) -> Self {
        let last_modified_by = last_modified_by.into();
        Self {
            model_type,
            database: database.into(),
            version: version.into(),
            last_modified,
            created_by: last_modified_by.clone(),
            last_modified_by,
            status: ModelStatus::CheckedIn,
            checked_out_by: None,
            counts: StructureCounts::default(),
            description: String::new(),
            created_date: last_modified,
            location: String::new(),
            tags: Vec::new(),
        }
    }

    /// Mark the model checked out by `owner`.
    pub fn checked_out(mut self, owner: impl Into<String>) -> Self {
        self.status = ModelStatus::CheckedOut;
        self.checked_out_by = Some(owner.into());
        self
    }

    /// Mark the model administratively locked.
    pub fn locked(mut self) -> Self {
        self.status = ModelStatus::Locked;
        self.checked_out_by = None;
        self
    }

    /// Set structural counts.
    pub fn with_counts(mut self, tables: u32, views: u32, relationships: u32, columns: u32) -> Self {
        self.counts = StructureCounts {
            tables,
            views,
            relationships,
            columns,
        };
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set creator and creation stamp.
    pub fn with_created(mut self, by: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.created_by = by.into();
        self.created_date = at;
        self
    }

    /// Set the repository location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Append tags in order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Check the status/owner invariant for the model with id `model_id`.
    pub fn validate(&self, model_id: &str) -> Result<()> {
        let owner_missing = self
            .checked_out_by
            .as_deref()
            .map_or(true, |owner| owner.trim().is_empty());
        if self.status == ModelStatus::CheckedOut && owner_missing {
            return Err(Error::MissingCheckoutOwner(model_id.to_string()));
        }
        Ok(())
    }
}
