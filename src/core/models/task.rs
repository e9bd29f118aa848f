//! Task model
//!
//! A task is a unit of work performed at one pipeline step against one
//! asset or shot. Tasks are created by studio tooling; this crate only
//! reads them.

use serde::{Deserialize, Serialize};

use super::{EntityKind, EntityRef};

/// A task record as returned by the production database
///
/// Every attribute except `id` may be absent: the store omits fields
/// that were not requested, and studio data is not always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: i64,

    /// Task name (e.g. "02_Animacion")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Pipeline step link; its name is the step name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<EntityRef>,

    /// Owning asset or shot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,

    /// Owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<EntityRef>,

    /// Status code (e.g. "wtg", "ip", "fin")
    #[serde(default, rename = "sg_status_list", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Task {
    /// Create a bare task with only an id
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self {
            id,
            content: None,
            step: None,
            entity: None,
            project: None,
            status: None,
        }
    }

    /// Step name, if the task has a named step
    #[must_use]
    pub fn step_name(&self) -> Option<&str> {
        self.step.as_ref().and_then(|s| s.name.as_deref()).filter(|n| !n.is_empty())
    }

    /// Whether the owning entity is an asset or a shot
    #[must_use]
    pub fn entity_kind(&self) -> Option<EntityKind> {
        self.entity.as_ref().and_then(EntityRef::kind)
    }

    /// Display name of the owning entity
    #[must_use]
    pub fn entity_name(&self) -> Option<&str> {
        self.entity.as_ref().and_then(|e| e.name.as_deref())
    }
}
