//! Resolver - resolves a task to the upstream work it depends on
//!
//! Given a task id, the resolver looks up the task's pipeline step and
//! owning entity, applies the [`PipelineRules`] to find upstream steps,
//! finds the tasks at those steps, and attaches the latest valid version
//! of each. Shot tasks additionally depend on a task of every linked
//! asset, chosen by walking the shot-asset step preference list.
//!
//! Only a missing root task is fatal. Every other gap (a step with no
//! task, an asset with no matching step, a failed sub-query) is logged
//! and leaves the rest of the result intact.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pipetrack::adapters::memory::MemoryStore;
//! use pipetrack::core::models::PipelineRules;
//! use pipetrack::resolver::DependencyResolver;
//!
//! let store = MemoryStore::from_snapshot_file("snapshot.json").unwrap();
//! let resolver = DependencyResolver::from_store(Arc::new(store), PipelineRules::default());
//! for dep in resolver.get_dependencies(5961).unwrap() {
//!     println!("{} {:?}", dep.source, dep.version_warning);
//! }
//! ```

use std::collections::HashSet;

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::core::models::{
    AssetFallback, DependencyRecord, DependencySource, EntityKind, EntityRef, PipelineRules, Task,
};
use crate::core::services::build_record;
use crate::managers::{AssetManager, ShotManager, StoreHandle, TaskManager, VersionManager};

/// Errors that abort dependency resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No task has the requested id
    #[error("task with id {0} not found")]
    TaskNotFound(i64),

    /// The root task could not be fetched
    #[error("failed to fetch task")]
    Store(#[source] anyhow::Error),
}

/// Per-call view of the task being resolved
///
/// Built once per [`DependencyResolver::get_dependencies`] call and passed
/// down explicitly, so concurrent calls never share state.
#[derive(Debug, Clone, Copy)]
struct TaskContext<'a> {
    task: &'a Task,
    step: Option<&'a str>,
    entity: Option<&'a EntityRef>,
    kind: Option<EntityKind>,
    project: Option<&'a EntityRef>,
}

impl<'a> TaskContext<'a> {
    fn new(task: &'a Task) -> Self {
        let step = task.step_name();
        if step.is_none() {
            warn!("Task {} has no step name", task.id);
        }

        let entity = task.entity.as_ref();
        let kind = entity.and_then(EntityRef::kind);
        match entity {
            None => warn!("Task {} has no entity", task.id),
            Some(e) if kind.is_none() => {
                warn!("Task {} belongs to unsupported entity type '{}'", task.id, e.entity_type);
            },
            Some(_) => {},
        }

        let project = task.project.as_ref();
        if project.is_none() {
            warn!("Task {} has no project", task.id);
        }

        Self {
            task,
            step,
            entity,
            kind,
            project,
        }
    }

    fn step_label(&self) -> &str {
        self.step.unwrap_or("<no step>")
    }

    fn kind_label(&self) -> String {
        self.kind.map_or_else(|| "<no entity type>".to_string(), |k| k.to_string())
    }
}

/// A task found for a linked asset, with how it was found
struct AssetMatch {
    task: Task,
    step: String,
    skipped: Vec<String>,
}

/// Resolves pipeline dependencies of tasks
///
/// Holds only immutable collaborators, so one instance can serve many
/// threads at once.
#[derive(Debug, Clone)]
pub struct DependencyResolver {
    tasks: TaskManager,
    versions: VersionManager,
    shots: ShotManager,
    assets: AssetManager,
    rules: PipelineRules,
}

impl DependencyResolver {
    /// Create a resolver from its collaborators
    #[must_use]
    pub const fn new(
        tasks: TaskManager,
        versions: VersionManager,
        shots: ShotManager,
        assets: AssetManager,
        rules: PipelineRules,
    ) -> Self {
        Self {
            tasks,
            versions,
            shots,
            assets,
            rules,
        }
    }

    /// Create a resolver whose managers all share one store
    #[must_use]
    pub fn from_store(store: StoreHandle, rules: PipelineRules) -> Self {
        Self::new(
            TaskManager::new(store.clone()),
            VersionManager::new(store.clone()),
            ShotManager::new(store.clone()),
            AssetManager::new(store),
            rules,
        )
    }

    /// The rule tables this resolver applies
    #[must_use]
    pub const fn rules(&self) -> &PipelineRules {
        &self.rules
    }

    /// Resolve all dependencies of a task
    ///
    /// Returns upstream-task records first, then (for shot tasks) asset
    /// records in the shot's linked-asset order. A task id appearing more
    /// than once in store results is reported only the first time.
    pub fn get_dependencies(&self, task_id: i64) -> Result<Vec<DependencyRecord>, ResolveError> {
        let task = self
            .tasks
            .get_task(task_id)
            .map_err(ResolveError::Store)?
            .ok_or(ResolveError::TaskNotFound(task_id))?;

        let ctx = TaskContext::new(&task);
        info!(
            "Resolving dependencies for task {task_id} ({} on {})",
            ctx.step_label(),
            ctx.kind_label()
        );

        let mut seen = HashSet::new();
        let mut dependencies = self.upstream_dependencies(ctx, &mut seen);

        if ctx.kind == Some(EntityKind::Shot) {
            dependencies.extend(self.asset_dependencies(ctx, &mut seen));
        }

        info!("Found {} total dependencies", dependencies.len());
        Ok(dependencies)
    }

    fn upstream_dependencies(
        &self,
        ctx: TaskContext<'_>,
        seen: &mut HashSet<i64>,
    ) -> Vec<DependencyRecord> {
        let (Some(step), Some(kind)) = (ctx.step, ctx.kind) else {
            debug!("Task {} cannot be classified; no upstream dependencies", ctx.task.id);
            return Vec::new();
        };

        let upstream_steps = self.rules.upstream_steps(kind, step);
        if upstream_steps.is_empty() {
            debug!("No upstream dependencies for {step} on {kind}");
            return Vec::new();
        }

        let (Some(entity), Some(project)) = (ctx.entity, ctx.project) else {
            warn!("Task {} has no project; skipping upstream lookup", ctx.task.id);
            return Vec::new();
        };

        debug!("Looking for upstream tasks with steps: {upstream_steps:?}");
        let upstream_tasks =
            match self.tasks.tasks_for_entity_with_steps(entity, upstream_steps, project) {
                Ok(tasks) => tasks,
                Err(err) => {
                    error!("Upstream task query failed for task {}: {err:#}", ctx.task.id);
                    return Vec::new();
                },
            };
        info!("Found {} upstream tasks", upstream_tasks.len());

        for wanted in upstream_steps {
            if !upstream_tasks.iter().any(|t| t.step_name() == Some(wanted.as_str())) {
                warn!("No {wanted} task found on {} for {step}", entity.label());
            }
        }

        upstream_tasks
            .into_iter()
            .filter(|t| Self::first_sighting(seen, t))
            .map(|t| self.dependency_record(DependencySource::UpstreamTask, t, None))
            .collect()
    }

    fn asset_dependencies(
        &self,
        ctx: TaskContext<'_>,
        seen: &mut HashSet<i64>,
    ) -> Vec<DependencyRecord> {
        let Some(shot_ref) = ctx.entity else {
            return Vec::new();
        };

        let shot = match self.shots.get_shot(shot_ref.id) {
            Ok(Some(shot)) => shot,
            Ok(None) => {
                error!("Could not retrieve shot {}", shot_ref.id);
                return Vec::new();
            },
            Err(err) => {
                error!("Shot query failed for shot {}: {err:#}", shot_ref.id);
                return Vec::new();
            },
        };

        if shot.assets.is_empty() {
            info!("Shot {} has no linked assets", shot.id);
            return Vec::new();
        }
        info!("Shot {} has {} linked assets", shot.id, shot.assets.len());

        let preference = &self.rules.shot_asset_preference;
        let Some(preferred) = self.rules.preferred_asset_step() else {
            warn!("No shot-asset step preference configured; skipping asset dependencies");
            return Vec::new();
        };

        let Some(project) = ctx.project else {
            warn!("Task {} has no project; skipping asset lookup", ctx.task.id);
            return Vec::new();
        };

        let mut dependencies = Vec::new();
        for asset in &shot.assets {
            let found = match self.resolve_asset_task(asset, preference, project) {
                Ok(Some(found)) => found,
                Ok(None) => {
                    warn!(
                        "No task found for asset {} with steps {preference:?}",
                        self.asset_label(asset)
                    );
                    continue;
                },
                Err(err) => {
                    error!("Task query for asset {} failed: {err:#}", self.asset_label(asset));
                    continue;
                },
            };

            if !Self::first_sighting(seen, &found.task) {
                continue;
            }

            if !found.skipped.is_empty() {
                debug!(
                    "Asset {} falls back to {} (skipped {:?})",
                    self.asset_label(asset),
                    found.step,
                    found.skipped
                );
            }

            let fallback = AssetFallback::new(preferred.to_string(), found.step, found.skipped);
            dependencies.push(self.dependency_record(
                DependencySource::AssetDependency,
                found.task,
                Some(fallback),
            ));
        }

        dependencies
    }

    /// Try each preferred step in order; the first step with a task wins
    ///
    /// A failed query ends the search for that asset.
    fn resolve_asset_task(
        &self,
        asset: &EntityRef,
        preference: &[String],
        project: &EntityRef,
    ) -> anyhow::Result<Option<AssetMatch>> {
        for (idx, step) in preference.iter().enumerate() {
            if let Some(task) = self.tasks.task_for_entity_with_step(asset, step, project)? {
                debug!("Found {step} task {} for asset {}", task.id, asset.label());
                return Ok(Some(AssetMatch {
                    task,
                    step: step.clone(),
                    skipped: preference[..idx].to_vec(),
                }));
            }
        }
        Ok(None)
    }

    /// Display name for a linked asset, fetching its code when the link has none
    fn asset_label(&self, asset: &EntityRef) -> String {
        if asset.name.as_deref().is_some_and(|n| !n.is_empty()) {
            return asset.label();
        }
        match self.assets.get_asset(asset.id) {
            Ok(Some(found)) => found.code.unwrap_or_else(|| asset.label()),
            Ok(None) | Err(_) => asset.label(),
        }
    }

    fn dependency_record(
        &self,
        source: DependencySource,
        task: Task,
        fallback: Option<AssetFallback>,
    ) -> DependencyRecord {
        let version = match self
            .versions
            .latest_valid_version(task.id, &self.rules.excluded_version_statuses)
        {
            Ok(version) => version,
            Err(err) => {
                error!("Version query failed for task {}: {err:#}", task.id);
                None
            },
        };

        let record = build_record(source, task, version, fallback);
        if let Some(version) = &record.version {
            debug!(
                "Version {} has {} published files",
                version.id,
                record.published_files.len()
            );
        }
        record
    }

    fn first_sighting(seen: &mut HashSet<i64>, task: &Task) -> bool {
        let first = seen.insert(task.id);
        if !first {
            debug!("Skipping duplicate task {}", task.id);
        }
        first
    }
}
