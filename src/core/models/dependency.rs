//! Dependency records
//!
//! A dependency record is the resolver's answer for one upstream input of a
//! task: which task provides it, its latest valid version, the files to
//! pull, and any warning the artist should see next to it.

use serde::{Deserialize, Serialize};

use super::{EntityRef, Task, Version};

/// How a dependency was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencySource {
    /// An earlier step on the same asset or shot
    UpstreamTask,
    /// A task on an asset linked to the shot
    AssetDependency,
}

impl std::fmt::Display for DependencySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpstreamTask => write!(f, "upstream_task"),
            Self::AssetDependency => write!(f, "asset_dependency"),
        }
    }
}

/// Step-preference outcome for an asset dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFallback {
    /// First entry of the shot-asset preference list
    pub preferred_step: String,

    /// Step of the task that was actually found
    pub actual_step: String,

    /// True when `actual_step` differs from `preferred_step`
    pub is_fallback: bool,

    /// Preferred steps tried before `actual_step`, in order, that had no task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_steps: Vec<String>,
}

impl AssetFallback {
    /// Record the outcome of walking the preference list
    #[must_use]
    pub fn new(preferred_step: String, actual_step: String, skipped_steps: Vec<String>) -> Self {
        let is_fallback = preferred_step != actual_step;
        Self {
            preferred_step,
            actual_step,
            is_fallback,
            skipped_steps,
        }
    }
}

/// One resolved dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Which branch of the resolver produced this record
    pub source: DependencySource,

    /// The task providing the dependency
    pub task: Task,

    /// The task's asset or shot
    pub entity: Option<EntityRef>,

    /// The task's pipeline step
    pub step: Option<EntityRef>,

    /// Latest version not in the excluded-status set
    pub version: Option<Version>,

    /// Files of `version`; empty when there is no version yet
    pub published_files: Vec<EntityRef>,

    /// Warning to render next to this dependency
    pub version_warning: Option<String>,

    /// Preference outcome, present only for asset dependencies
    #[serde(flatten)]
    pub fallback: Option<AssetFallback>,
}

impl DependencyRecord {
    /// Whether this record was resolved through a less-preferred step
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback.as_ref().is_some_and(|f| f.is_fallback)
    }

    /// Whether a usable version was found
    #[must_use]
    pub const fn has_version(&self) -> bool {
        self.version.is_some()
    }
}
