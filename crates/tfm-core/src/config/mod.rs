//! Provider configuration.

pub mod enum_config;

pub use enum_config::{FamilyTables, FrameworkEnumConfig};
