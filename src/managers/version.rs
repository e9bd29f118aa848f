//! Version manager

use crate::core::models::{EntityRef, EntityType, Version};
use crate::core::query::{Direction, Query, VersionField};

use super::{StoreHandle, decode_all};

const VERSION_FIELDS: &[VersionField] = &[
    VersionField::Id,
    VersionField::Code,
    VersionField::CreatedAt,
    VersionField::PublishedFiles,
    VersionField::Status,
    VersionField::Task,
];

/// Typed access to version records
#[derive(Clone)]
pub struct VersionManager {
    store: StoreHandle,
}

impl std::fmt::Debug for VersionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionManager").finish_non_exhaustive()
    }
}

impl VersionManager {
    /// Create a manager over a store
    #[must_use]
    pub const fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Versions of a task whose status is not excluded, newest first
    pub fn valid_versions(
        &self,
        task_id: i64,
        excluded_statuses: &[String],
    ) -> anyhow::Result<Vec<Version>> {
        let task = EntityRef::new(EntityType::Task, task_id);
        let mut query = Query::new().is_link(VersionField::Task, &task);
        if !excluded_statuses.is_empty() {
            query = query.not_in(VersionField::Status, excluded_statuses.iter().map(String::as_str));
        }
        let query = query
            .fields(VERSION_FIELDS)
            .order_by(VersionField::CreatedAt, Direction::Desc)
            .build();
        Ok(decode_all(EntityType::Version, self.store.find(&query)?))
    }

    /// Latest version of a task whose status is not excluded
    pub fn latest_valid_version(
        &self,
        task_id: i64,
        excluded_statuses: &[String],
    ) -> anyhow::Result<Option<Version>> {
        let latest = self.valid_versions(task_id, excluded_statuses)?.into_iter().next();
        match &latest {
            Some(v) => log::debug!("Found version {} for task {task_id}", v.id),
            None => log::debug!("No valid version found for task {task_id}"),
        }
        Ok(latest)
    }
}
