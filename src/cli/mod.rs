//! CLI layer for pipetrack
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`commands`] - Command implementations
//! - [`session`] - Config and store access shared by commands

pub mod app;
pub mod commands;
pub mod session;

// Re-export main entry point
pub use app::run;
