//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`record`] - Assemble dependency records and their warnings
//! - [`rules_check`] - Validate pipeline rule tables
//! - [`work_path`] - Build work-area paths for tasks

pub mod record;
pub mod rules_check;
pub mod work_path;

pub use record::build_record;
pub use rules_check::{RuleIssue, check_rules, has_errors};
pub use work_path::task_work_path;
