//! Core domain logic for pipetrack
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Version, Shot, `DependencyRecord`, rules)
//! - `query` - Typed field enumerations and store queries
//! - `services/` - Record assembly, rule validation, work paths
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod query;
pub mod services;
