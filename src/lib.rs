pub mod cycles;
pub mod error;
pub mod model;
pub mod report;
pub mod rules;

pub use cycles::find_cycle_groups;
pub use error::{GridlockError, Result};
pub use model::CodeGraph;
pub use rules::{parse_rules, resolve_pattern, validate_rules};
