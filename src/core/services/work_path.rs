//! Work-area path building
//!
//! Every task has a conventional folder under the studio work area:
//!
//! ```text
//! {work_area}/{project}/ASSETS/{Characters|Environments|Props}/{asset}/{task}
//! {work_area}/{project}/SHOTS/{shot}/{task}
//! ```

use std::path::{Path, PathBuf};

use crate::core::models::{EntityKind, Task};

/// Folder for an entity kind
#[must_use]
pub const fn kind_folder(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Asset => "ASSETS",
        EntityKind::Shot => "SHOTS",
    }
}

/// Folder for an asset type; unmapped types have no folder
#[must_use]
pub fn asset_type_folder(asset_type: &str) -> Option<&'static str> {
    match asset_type {
        "Character" => Some("Characters"),
        "Environment" => Some("Environments"),
        "Prop" => Some("Props"),
        _ => None,
    }
}

/// Build the work path of a task
///
/// `asset_type` is only consulted for asset tasks. Returns `None` when any
/// path component is missing.
#[must_use]
pub fn task_work_path(work_area: &Path, task: &Task, asset_type: Option<&str>) -> Option<PathBuf> {
    let task_name = task.content.as_deref().filter(|s| !s.is_empty())?;
    let project = task.project.as_ref()?.name.as_deref().filter(|s| !s.is_empty())?;
    let kind = task.entity_kind()?;
    let entity_name = task.entity_name().filter(|s| !s.is_empty())?;

    let mut path = work_area.join(project).join(kind_folder(kind));
    if kind == EntityKind::Asset {
        path.push(asset_type_folder(asset_type?)?);
    }
    path.push(entity_name);
    path.push(task_name);
    Some(path)
}
