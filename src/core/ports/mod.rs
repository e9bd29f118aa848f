//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the resolver and the
//! production database.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The managers and resolver depend only on these traits, never on a
//! concrete store. Tests drive them with in-memory or recording stores.

mod entity_store;

pub use entity_store::{EntityStore, Record};
