//! Entity store port
//!
//! Defines the interface to the remote production database.

use serde_json::{Map, Value};

use crate::core::query::StoreQuery;

/// A record: field name -> value
///
/// Fields that were not requested are absent rather than null.
pub type Record = Map<String, Value>;

/// Read access to the production database
///
/// Implementations execute queries against a remote service, a snapshot
/// file, or an in-memory table. Every call is a blocking round-trip.
pub trait EntityStore: Send + Sync {
    /// Find all records matching the query, in store order
    fn find(&self, query: &StoreQuery) -> anyhow::Result<Vec<Record>>;

    /// Find the first record matching the query
    fn find_one(&self, query: &StoreQuery) -> anyhow::Result<Option<Record>> {
        Ok(self.find(query)?.into_iter().next())
    }
}
