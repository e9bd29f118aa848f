//! Version model
//!
//! A version is one submission of work against a task. Its published
//! files are the deliverables downstream steps consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityRef;

/// A version record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Unique identifier
    pub id: i64,

    /// Display code (e.g. "cianlu_rig_v003")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Status code; some codes ("rej", "omt") disqualify the version
    #[serde(default, rename = "sg_status_list", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Creation timestamp; "latest" is decided by this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// The task this version was submitted against
    #[serde(default, rename = "sg_task", skip_serializing_if = "Option::is_none")]
    pub task: Option<EntityRef>,

    /// Deliverables attached to this version
    #[serde(default)]
    pub published_files: Vec<EntityRef>,
}
