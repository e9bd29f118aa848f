//! Domain models for pipetrack
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A unit of work at one pipeline step
//! - [`Version`] - A timestamped submission against a task
//! - [`Shot`] / [`Asset`] - What tasks are performed against
//! - [`EntityRef`] - A typed link between records
//! - [`DependencyRecord`] - One resolved upstream input of a task
//! - [`PipelineRules`] - Step dependency tables and version policy
//! - [`Severity`] - How serious a rule issue is

mod dependency;
mod entity;
mod pipeline;
mod severity;
mod shot;
mod task;
mod version;

pub use dependency::{AssetFallback, DependencyRecord, DependencySource};
pub use entity::{EntityKind, EntityRef, EntityType};
pub use pipeline::{PipelineRules, StepTable};
pub use severity::Severity;
pub use shot::{Asset, Shot};
pub use task::Task;
pub use version::Version;
