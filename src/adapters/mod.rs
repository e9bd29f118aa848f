//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory/` - Entity store over in-memory tables and JSON snapshots

pub mod memory;
