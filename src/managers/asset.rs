//! Asset manager

use crate::core::models::{Asset, EntityType};
use crate::core::query::{AssetField, Query};

use super::{StoreHandle, decode};

/// Typed access to asset records
#[derive(Clone)]
pub struct AssetManager {
    store: StoreHandle,
}

impl std::fmt::Debug for AssetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetManager").finish_non_exhaustive()
    }
}

impl AssetManager {
    /// Create a manager over a store
    #[must_use]
    pub const fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Fetch an asset by id
    pub fn get_asset(&self, asset_id: i64) -> anyhow::Result<Option<Asset>> {
        let query = Query::new()
            .is(AssetField::Id, asset_id)
            .fields(&[AssetField::Id, AssetField::Code, AssetField::AssetType])
            .build();
        self.store
            .find_one(&query)?
            .map(|r| decode(EntityType::Asset, r))
            .transpose()
    }
}
