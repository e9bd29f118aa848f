//! In-memory store
//!
//! Implements `EntityStore` over tables loaded from a JSON snapshot.

mod filter;
mod store;

pub use store::{MemoryStore, SnapshotError};
