use super::error_code::{self, FrameworkEnumErrorCode};

/// Errors raised while enumerating target frameworks.
///
/// `MissingRequiredTable`, `MissingRequiredProperty` and `EmptyItemKey` are
/// snapshot integrity faults: the whole call fails and no partial list is returned.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkEnumError {
    #[error("Required rule table missing from snapshot: {table}")]
    MissingRequiredTable { table: String },

    #[error("Item '{item}' in {table} is missing required property {property}")]
    MissingRequiredProperty {
        table: String,
        item: String,
        property: String,
    },

    #[error("Item with empty key in {table}")]
    EmptyItemKey { table: String },

    #[error("Provider already registered: {name}")]
    DuplicateProvider { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl FrameworkEnumError {
    pub fn missing_table(table: impl Into<String>) -> Self {
        Self::MissingRequiredTable {
            table: table.into(),
        }
    }

    pub fn missing_property(
        table: impl Into<String>,
        item: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self::MissingRequiredProperty {
            table: table.into(),
            item: item.into(),
            property: property.into(),
        }
    }

    /// Whether the error reports a malformed snapshot rather than a host setup problem.
    pub fn is_integrity_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredTable { .. }
                | Self::MissingRequiredProperty { .. }
                | Self::EmptyItemKey { .. }
        )
    }
}

impl From<toml::de::Error> for FrameworkEnumError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl FrameworkEnumErrorCode for FrameworkEnumError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredTable { .. } => error_code::MISSING_REQUIRED_TABLE,
            Self::MissingRequiredProperty { .. } => error_code::MISSING_REQUIRED_PROPERTY,
            Self::EmptyItemKey { .. } => error_code::EMPTY_ITEM_KEY,
            Self::DuplicateProvider { .. } => error_code::DUPLICATE_PROVIDER,
            Self::Config(_) | Self::Io { .. } => error_code::CONFIG_ERROR,
            Self::Snapshot(_) => error_code::SNAPSHOT_ERROR,
        }
    }
}

/// Convenience type alias.
pub type FrameworkEnumResult<T> = Result<T, FrameworkEnumError>;
