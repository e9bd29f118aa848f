//! Task manager

use crate::core::models::{EntityRef, EntityType, Task};
use crate::core::query::{Query, TaskField};

use super::{StoreHandle, decode, decode_all};

/// Fields fetched for every task
const TASK_FIELDS: &[TaskField] = &[
    TaskField::Id,
    TaskField::Content,
    TaskField::Step,
    TaskField::Entity,
    TaskField::Project,
    TaskField::Status,
];

/// Typed access to task records
#[derive(Clone)]
pub struct TaskManager {
    store: StoreHandle,
}

impl std::fmt::Debug for TaskManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskManager").finish_non_exhaustive()
    }
}

impl TaskManager {
    /// Create a manager over a store
    #[must_use]
    pub const fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Fetch one task by id
    pub fn get_task(&self, task_id: i64) -> anyhow::Result<Option<Task>> {
        let query = Query::new().is(TaskField::Id, task_id).fields(TASK_FIELDS).build();
        self.store
            .find_one(&query)?
            .map(|r| decode(EntityType::Task, r))
            .transpose()
    }

    /// Tasks on `entity` in `project` whose step is one of `steps`
    pub fn tasks_for_entity_with_steps(
        &self,
        entity: &EntityRef,
        steps: &[String],
        project: &EntityRef,
    ) -> anyhow::Result<Vec<Task>> {
        let query = Query::new()
            .is_link(TaskField::Entity, entity)
            .in_values(TaskField::StepCode, steps.iter().map(String::as_str))
            .is_link(TaskField::Project, project)
            .fields(TASK_FIELDS)
            .build();
        Ok(decode_all(EntityType::Task, self.store.find(&query)?))
    }

    /// First task on `entity` in `project` at exactly `step`
    pub fn task_for_entity_with_step(
        &self,
        entity: &EntityRef,
        step: &str,
        project: &EntityRef,
    ) -> anyhow::Result<Option<Task>> {
        let query = Query::new()
            .is_link(TaskField::Entity, entity)
            .is(TaskField::StepCode, step)
            .is_link(TaskField::Project, project)
            .fields(TASK_FIELDS)
            .build();
        self.store
            .find_one(&query)?
            .map(|r| decode(EntityType::Task, r))
            .transpose()
    }

    /// Tasks assigned to a user
    pub fn tasks_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Task>> {
        let user = EntityRef::new(EntityType::HumanUser, user_id);
        let query = Query::new()
            .is_link(TaskField::Assignees, &user)
            .fields(TASK_FIELDS)
            .build();
        Ok(decode_all(EntityType::Task, self.store.find(&query)?))
    }
}
