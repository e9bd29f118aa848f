//! Shot manager

use crate::core::models::{EntityType, Shot};
use crate::core::query::{Query, ShotField};

use super::{StoreHandle, decode};

/// Typed access to shot records
#[derive(Clone)]
pub struct ShotManager {
    store: StoreHandle,
}

impl std::fmt::Debug for ShotManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotManager").finish_non_exhaustive()
    }
}

impl ShotManager {
    /// Create a manager over a store
    #[must_use]
    pub const fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Fetch a shot with its linked assets
    pub fn get_shot(&self, shot_id: i64) -> anyhow::Result<Option<Shot>> {
        let query = Query::new()
            .is(ShotField::Id, shot_id)
            .fields(&[ShotField::Id, ShotField::Code, ShotField::Assets])
            .build();
        self.store
            .find_one(&query)?
            .map(|r| decode(EntityType::Shot, r))
            .transpose()
    }
}
