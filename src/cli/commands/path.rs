//! Print a task's work-area path

use std::path::Path;

use anyhow::anyhow;

use crate::cli::session::Session;
use pipetrack::core::models::EntityKind;
use pipetrack::core::services::task_work_path;
use pipetrack::managers::{AssetManager, TaskManager};
use pipetrack::output::{OutputMode, PathReport};

/// Build and print the work path of a task
pub fn path(
    session: &Session,
    task_id: i64,
    work_area: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = session.config()?;
    let store = session.store(&config)?;

    let task = TaskManager::new(store.clone())
        .get_task(task_id)?
        .ok_or_else(|| anyhow!("task with id {task_id} not found"))?;

    // Asset paths need the asset type folder
    let asset_type = match (task.entity_kind(), &task.entity) {
        (Some(EntityKind::Asset), Some(entity)) => {
            AssetManager::new(store).get_asset(entity.id)?.and_then(|a| a.asset_type)
        },
        _ => None,
    };

    let path = task_work_path(work_area, &task, asset_type.as_deref());
    PathReport { task_id, path }.render(mode);
    Ok(())
}
