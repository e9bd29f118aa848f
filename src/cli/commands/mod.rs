//! Command implementations

mod deps;
mod path;
mod rules;
mod tasks;
mod versions;

pub use deps::deps;
pub use path::path;
pub use rules::rules;
pub use tasks::tasks;
pub use versions::versions;
