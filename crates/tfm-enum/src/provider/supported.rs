//! The `TargetFramework` values provider.

use tfm_core::constants::SUPPORTED_TARGET_FRAMEWORKS_PROVIDER;
use tfm_core::types::family::identifiers_equal;
use tfm_core::{FrameworkEnumConfig, FrameworkEnumResult, SnapshotSource, ValueEntry};

use super::FrameworkEnumProvider;
use crate::transform::mapper::DisplayNameMapper;
use crate::transform::order::NaturalDisplayOrder;
use crate::transform::{transform_with, SelectionRules};

/// Lists the frameworks the SDK supports for the project's framework family,
/// in natural display order.
#[derive(Debug, Clone)]
pub struct SupportedTargetFrameworksProvider {
    rules: SelectionRules,
    mapper: DisplayNameMapper,
    order: NaturalDisplayOrder,
    capability: String,
}

impl SupportedTargetFrameworksProvider {
    /// Build from a validated config.
    pub fn new(config: &FrameworkEnumConfig) -> FrameworkEnumResult<Self> {
        config.validate()?;
        Ok(Self {
            rules: SelectionRules::from_config(config),
            mapper: DisplayNameMapper::new(config.display_name_property.as_str()),
            order: NaturalDisplayOrder,
            capability: config.capability.clone(),
        })
    }
}

impl Default for SupportedTargetFrameworksProvider {
    fn default() -> Self {
        let config = FrameworkEnumConfig::default();
        Self {
            rules: SelectionRules::from_config(&config),
            mapper: DisplayNameMapper::new(config.display_name_property),
            order: NaturalDisplayOrder,
            capability: config.capability,
        }
    }
}

impl FrameworkEnumProvider for SupportedTargetFrameworksProvider {
    fn name(&self) -> &str {
        SUPPORTED_TARGET_FRAMEWORKS_PROVIDER
    }

    fn rule_names(&self) -> Vec<&str> {
        self.rules.rule_names()
    }

    fn applies_to(&self, capabilities: &[&str]) -> bool {
        capabilities
            .iter()
            .any(|c| identifiers_equal(c, &self.capability))
    }

    fn transform(&self, snapshot: &dyn SnapshotSource) -> FrameworkEnumResult<Vec<ValueEntry>> {
        transform_with(snapshot, &self.rules, &self.mapper, &self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_to_dotnet_projects_only() {
        let provider = SupportedTargetFrameworksProvider::default();
        assert!(provider.applies_to(&["CSharp", "DotNet"]));
        assert!(provider.applies_to(&["dotnet"]));
        assert!(!provider.applies_to(&["Cpp"]));
        assert!(!provider.applies_to(&[]));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = FrameworkEnumConfig {
            general_table: String::new(),
            ..Default::default()
        };
        assert!(SupportedTargetFrameworksProvider::new(&config).is_err());
    }

    #[test]
    fn custom_display_property_is_used() {
        let config = FrameworkEnumConfig {
            display_name_property: "FriendlyName".into(),
            ..Default::default()
        };
        let provider = SupportedTargetFrameworksProvider::new(&config).unwrap();
        assert_eq!(provider.mapper.property(), "FriendlyName");
        assert_eq!(provider.name(), "SupportedTargetFrameworksEnumProvider");
    }
}
