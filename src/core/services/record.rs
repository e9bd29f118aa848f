//! Dependency record assembly
//!
//! Pure logic that turns a resolved task and its latest version into a
//! [`DependencyRecord`], including the warning shown next to it.

use crate::core::models::{AssetFallback, DependencyRecord, DependencySource, Task, Version};

const UNKNOWN: &str = "Unknown";

/// Warning for a dependency that has no usable version yet
#[must_use]
pub fn no_version_warning(step: &str, entity: &str) -> String {
    format!("No approved version available for {step} on {entity}")
}

/// Warning for an asset dependency resolved through a fallback step
#[must_use]
pub fn fallback_warning(actual_step: &str, preferred_step: &str, entity: &str) -> String {
    format!("Using {actual_step} for {entity} (no {preferred_step} available)")
}

/// Build a dependency record
///
/// The fallback warning replaces the no-version warning: when both apply,
/// only the fallback message is kept.
#[must_use]
pub fn build_record(
    source: DependencySource,
    task: Task,
    version: Option<Version>,
    fallback: Option<AssetFallback>,
) -> DependencyRecord {
    let entity_name = task.entity_name().unwrap_or(UNKNOWN).to_string();

    let (published_files, mut version_warning) = match &version {
        Some(v) => (v.published_files.clone(), None),
        None => {
            let step = task.step_name().unwrap_or(UNKNOWN);
            (Vec::new(), Some(no_version_warning(step, &entity_name)))
        },
    };

    if let Some(f) = fallback.as_ref().filter(|f| f.is_fallback) {
        version_warning = Some(fallback_warning(&f.actual_step, &f.preferred_step, &entity_name));
    }

    DependencyRecord {
        source,
        entity: task.entity.clone(),
        step: task.step.clone(),
        task,
        version,
        published_files,
        version_warning,
        fallback,
    }
}
