//! List valid versions of a task

use crate::cli::session::Session;
use pipetrack::managers::VersionManager;
use pipetrack::output::{OutputMode, VersionsReport};

/// Print all non-excluded versions of a task, newest first
pub fn versions(session: &Session, task_id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let config = session.config()?;
    let manager = VersionManager::new(session.store(&config)?);
    let versions =
        manager.valid_versions(task_id, &config.pipeline.excluded_version_statuses)?;
    VersionsReport { task_id, versions }.render(mode);
    Ok(())
}
