//! # tfm-core
//!
//! Foundation crate for target framework enumeration.
//! Defines the snapshot data model, errors, config, tracing setup, and the
//! string comparers the enum provider sorts and classifies with.

pub mod config;
pub mod constants;
pub mod errors;
pub mod natural;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FrameworkEnumConfig;
pub use errors::error_code::FrameworkEnumErrorCode;
pub use errors::{FrameworkEnumError, FrameworkEnumResult};
pub use natural::natural_cmp;
pub use types::collections::FxHashMap;
pub use types::family::FrameworkFamily;
pub use types::snapshot::{RowProperties, RuleSnapshot, RuleTable, SnapshotSource};
pub use types::value::ValueEntry;
