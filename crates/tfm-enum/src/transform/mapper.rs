//! Row → ValueEntry mapping strategies.

use tfm_core::{FrameworkEnumError, FrameworkEnumResult, RowProperties, ValueEntry};

/// Converts one rule item into an enum value.
///
/// Closures with the same signature implement this trait, so callers can pass
/// an ad-hoc mapping straight to [`crate::transform_with`].
pub trait RowMapper {
    fn map_row(
        &self,
        table: &str,
        key: &str,
        properties: &RowProperties,
    ) -> FrameworkEnumResult<ValueEntry>;
}

impl<F> RowMapper for F
where
    F: Fn(&str, &str, &RowProperties) -> FrameworkEnumResult<ValueEntry>,
{
    fn map_row(
        &self,
        table: &str,
        key: &str,
        properties: &RowProperties,
    ) -> FrameworkEnumResult<ValueEntry> {
        self(table, key, properties)
    }
}

/// Uses the item key as the value and a required metadata property as its
/// display text.
///
/// ```text
/// <SupportedTargetFramework Include=".NETCoreApp,Version=v5.0" DisplayName=".NET 5.0" />
///   -> ValueEntry { name: ".NETCoreApp,Version=v5.0", display_name: ".NET 5.0" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNameMapper {
    property: String,
}

impl DisplayNameMapper {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

impl Default for DisplayNameMapper {
    fn default() -> Self {
        Self::new(tfm_core::constants::DISPLAY_NAME_PROPERTY)
    }
}

impl RowMapper for DisplayNameMapper {
    fn map_row(
        &self,
        table: &str,
        key: &str,
        properties: &RowProperties,
    ) -> FrameworkEnumResult<ValueEntry> {
        if key.is_empty() {
            return Err(FrameworkEnumError::EmptyItemKey {
                table: table.to_string(),
            });
        }
        let display = properties
            .get(&self.property)
            .ok_or_else(|| FrameworkEnumError::missing_property(table, key, &self.property))?;
        Ok(ValueEntry::new(key, display.as_str()))
    }
}
