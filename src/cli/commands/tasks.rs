//! List a user's tasks

use crate::cli::session::Session;
use pipetrack::managers::TaskManager;
use pipetrack::output::{OutputMode, TasksReport};

/// Print the tasks assigned to a user
pub fn tasks(session: &Session, user_id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let config = session.config()?;
    let manager = TaskManager::new(session.store(&config)?);
    let tasks = manager.tasks_for_user(user_id)?;
    TasksReport { user_id, tasks }.render(mode);
    Ok(())
}
