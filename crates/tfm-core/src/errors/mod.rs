//! Error taxonomy for target framework enumeration.

pub mod error_code;
mod enum_error;

pub use enum_error::{FrameworkEnumError, FrameworkEnumResult};
