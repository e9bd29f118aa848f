//! Resolve task dependencies

use crate::cli::session::Session;
use pipetrack::output::{DependencyReport, OutputMode};

/// Resolve and print the dependencies of a task
pub fn deps(session: &Session, task_id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let resolver = session.resolver()?;
    let dependencies = resolver.get_dependencies(task_id)?;
    DependencyReport::new(task_id, dependencies).render(mode);
    Ok(())
}
