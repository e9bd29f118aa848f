//! In-memory entity store
//!
//! Holds records per entity category and answers [`StoreQuery`] with the
//! same filter semantics as the production database. Loaded from a JSON
//! snapshot for offline use, or built record by record in tests.
//!
//! Snapshot format:
//!
//! ```json
//! {
//!   "Task": [{"id": 5961, "content": "02_Layout", "step": {"type": "Step", "id": 4, "name": "Layout"}}],
//!   "Version": [],
//!   "Shot": [],
//!   "Asset": []
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde_json::Value;
use thiserror::Error;

use super::filter;
use crate::core::models::EntityType;
use crate::core::ports::{EntityStore, Record};
use crate::core::query::StoreQuery;

/// Errors loading a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not valid JSON of the expected shape
    #[error("invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record is not an object with an integer `id`
    #[error("{entity} record #{index} has no integer id")]
    InvalidRecord {
        /// Category of the bad record
        entity: EntityType,
        /// Position within its category
        index: usize,
    },

    /// A top-level key does not name a known entity category
    #[error("snapshot contains an unknown entity category")]
    UnknownEntity,
}

/// Entity store backed by in-memory tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: BTreeMap<EntityType, Vec<Record>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Load a store from a snapshot file
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&content)?;
        debug!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load a store from snapshot JSON text
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: BTreeMap<EntityType, Vec<Value>> = serde_json::from_str(json)?;
        if raw.contains_key(&EntityType::Unknown) {
            return Err(SnapshotError::UnknownEntity);
        }

        let mut store = Self::new();
        for (entity, values) in raw {
            for (index, value) in values.into_iter().enumerate() {
                let record = match value {
                    Value::Object(map) if map.get("id").is_some_and(Value::is_i64) => map,
                    _ => return Err(SnapshotError::InvalidRecord { entity, index }),
                };
                store.insert(entity, record);
            }
        }
        Ok(store)
    }

    /// Add a record; its `type` is set to `entity`
    pub fn insert(&mut self, entity: EntityType, mut record: Record) {
        record.insert("type".to_string(), Value::String(entity.as_str().to_string()));
        self.tables.entry(entity).or_default().push(record);
    }

    /// Total number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(Vec::is_empty)
    }

    /// Number of records of one category
    #[must_use]
    pub fn count(&self, entity: EntityType) -> usize {
        self.tables.get(&entity).map_or(0, Vec::len)
    }
}

/// Keep `type`, `id` and the requested fields; no fields means all
fn project(record: &Record, fields: &[&'static str]) -> Record {
    if fields.is_empty() {
        return record.clone();
    }
    record
        .iter()
        .filter(|(k, _)| k.as_str() == "type" || k.as_str() == "id" || fields.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

impl EntityStore for MemoryStore {
    fn find(&self, query: &StoreQuery) -> anyhow::Result<Vec<Record>> {
        let Some(table) = self.tables.get(&query.entity) else {
            trace!("No {} table; returning nothing", query.entity);
            return Ok(Vec::new());
        };

        let mut hits: Vec<&Record> =
            table.iter().filter(|r| filter::matches_all(r, &query.filters)).collect();
        if !query.order.is_empty() {
            hits.sort_by(|a, b| filter::compare(a, b, &query.order));
        }

        trace!(
            "find {} with {} filters: {} of {} records",
            query.entity,
            query.filters.len(),
            hits.len(),
            table.len()
        );
        Ok(hits.into_iter().map(|r| project(r, &query.fields)).collect())
    }
}
