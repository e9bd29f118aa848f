//! Entity references
//!
//! Every record in the production database is addressed by its entity type
//! and numeric id. Links between records (a task's owning shot, a version's
//! published files) are carried as [`EntityRef`] values.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Entity categories known to the production database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    /// A production (show)
    Project,
    /// A pipeline step (Model, Rig, Layout, ...)
    Step,
    /// A unit of work
    Task,
    /// A snapshot of submitted work
    Version,
    /// A reusable production asset (character, prop, environment)
    Asset,
    /// A shot in an edit
    Shot,
    /// A deliverable artifact attached to a version
    PublishedFile,
    /// A sequence of shots
    Sequence,
    /// An artist or supervisor account
    HumanUser,
    /// Any category this client does not model
    #[serde(other)]
    Unknown,
}

impl EntityType {
    /// Name used by the production database for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Step => "Step",
            Self::Task => "Task",
            Self::Version => "Version",
            Self::Asset => "Asset",
            Self::Shot => "Shot",
            Self::PublishedFile => "PublishedFile",
            Self::Sequence => "Sequence",
            Self::HumanUser => "HumanUser",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two categories a task can be performed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Asset-side work (modeling, rigging, surfacing)
    Asset,
    /// Shot-side work (layout, animation, lighting)
    Shot,
}

impl EntityKind {
    /// Classify an entity type, if it is one tasks are planned against
    #[must_use]
    pub const fn from_entity_type(entity_type: EntityType) -> Option<Self> {
        match entity_type {
            EntityType::Asset => Some(Self::Asset),
            EntityType::Shot => Some(Self::Shot),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Shot => write!(f, "Shot"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" | "assets" => Ok(Self::Asset),
            "shot" | "shots" => Ok(Self::Shot),
            _ => Err(format!("Invalid entity kind: {s}. Use: asset, shot")),
        }
    }
}

/// A typed link to another record: `{type, id, name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Category of the linked record
    #[serde(rename = "type")]
    pub entity_type: EntityType,

    /// Record id, unique within its category
    pub id: i64,

    /// Display name, when the store includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityRef {
    /// Create a link without a display name
    #[must_use]
    pub const fn new(entity_type: EntityType, id: i64) -> Self {
        Self {
            entity_type,
            id,
            name: None,
        }
    }

    /// Create a link with a display name
    #[must_use]
    pub fn named(entity_type: EntityType, id: i64, name: impl Into<String>) -> Self {
        Self {
            entity_type,
            id,
            name: Some(name.into()),
        }
    }

    /// Display name, or `"{type} {id}"` when the store did not include one
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("{} {}", self.entity_type, self.id))
    }

    /// Link value as used in query predicates (identity only)
    #[must_use]
    pub fn to_link_value(&self) -> Value {
        json!({ "type": self.entity_type.as_str(), "id": self.id })
    }

    /// Task/entity classification of this link
    #[must_use]
    pub const fn kind(&self) -> Option<EntityKind> {
        EntityKind::from_entity_type(self.entity_type)
    }
}
