//! Entity managers
//!
//! Typed façades over the [`EntityStore`] port, one per entity category.
//! Each manager builds typed queries, sends them through the store, and
//! decodes the returned records into domain models.
//!
//! - [`TaskManager`] - Task lookups by id, entity, step and assignee
//! - [`VersionManager`] - Latest valid version resolution
//! - [`ShotManager`] - Shots and their linked assets
//! - [`AssetManager`] - Asset lookups

mod asset;
mod shot;
mod task;
mod version;

use std::sync::Arc;

use anyhow::Context;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::models::EntityType;
use crate::core::ports::{EntityStore, Record};

pub use asset::AssetManager;
pub use shot::ShotManager;
pub use task::TaskManager;
pub use version::VersionManager;

/// Decode one store record into a typed model
fn decode<T: DeserializeOwned>(entity: EntityType, record: Record) -> anyhow::Result<T> {
    serde_json::from_value(Value::Object(record))
        .with_context(|| format!("malformed {entity} record"))
}

/// Decode a list of store records; malformed ones are logged and dropped
fn decode_all<T: DeserializeOwned>(entity: EntityType, records: Vec<Record>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|r| match decode(entity, r) {
            Ok(model) => Some(model),
            Err(err) => {
                warn!("Skipping record: {err:#}");
                None
            },
        })
        .collect()
}

/// Shared handle to a store, as held by every manager
pub type StoreHandle = Arc<dyn EntityStore>;
