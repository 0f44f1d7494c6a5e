//! Stable machine-readable error codes.

pub const MISSING_REQUIRED_TABLE: &str = "MISSING_REQUIRED_TABLE";
pub const MISSING_REQUIRED_PROPERTY: &str = "MISSING_REQUIRED_PROPERTY";
pub const EMPTY_ITEM_KEY: &str = "EMPTY_ITEM_KEY";
pub const DUPLICATE_PROVIDER: &str = "DUPLICATE_PROVIDER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";

/// Maps an error to a stable code hosts can match on without parsing messages.
pub trait FrameworkEnumErrorCode {
    fn error_code(&self) -> &'static str;
}
