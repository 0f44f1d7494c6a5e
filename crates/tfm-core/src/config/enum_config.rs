//! FrameworkEnumConfig: rule and property names the enum provider reads.
//!
//! Every field defaults to the standard .NET SDK schema names, so an empty
//! TOML document yields a working configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{FrameworkEnumError, FrameworkEnumResult};
use crate::types::family::FrameworkFamily;

/// Supported-frameworks rule name for each framework family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyTables {
    pub net_core_app: String,
    pub net_framework: String,
    pub net_standard: String,
}

impl Default for FamilyTables {
    fn default() -> Self {
        Self {
            net_core_app: constants::SUPPORTED_NET_CORE_APP_TARGET_FRAMEWORK.to_string(),
            net_framework: constants::SUPPORTED_NET_FRAMEWORK_TARGET_FRAMEWORK.to_string(),
            net_standard: constants::SUPPORTED_NET_STANDARD_TARGET_FRAMEWORK.to_string(),
        }
    }
}

impl FamilyTables {
    /// Rule name bound to `family`.
    pub fn table_for(&self, family: FrameworkFamily) -> &str {
        match family {
            FrameworkFamily::NetCoreApp => &self.net_core_app,
            FrameworkFamily::NetFramework => &self.net_framework,
            FrameworkFamily::NetStandard => &self.net_standard,
        }
    }
}

/// Configuration for the supported target frameworks provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkEnumConfig {
    /// Rule holding `TargetFrameworkIdentifier` and `TargetFramework`.
    pub general_table: String,
    pub identifier_property: String,
    pub framework_property: String,
    /// Item metadata read as the display text of each supported framework.
    pub display_name_property: String,
    pub families: FamilyTables,
    /// Project capability gating the provider.
    pub capability: String,
}

impl Default for FrameworkEnumConfig {
    fn default() -> Self {
        Self {
            general_table: constants::CONFIGURATION_GENERAL.to_string(),
            identifier_property: constants::TARGET_FRAMEWORK_IDENTIFIER_PROPERTY.to_string(),
            framework_property: constants::TARGET_FRAMEWORK_PROPERTY.to_string(),
            display_name_property: constants::DISPLAY_NAME_PROPERTY.to_string(),
            families: FamilyTables::default(),
            capability: constants::DOT_NET_CAPABILITY.to_string(),
        }
    }
}

impl FrameworkEnumConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse and validate a TOML string.
    pub fn load(toml_str: &str) -> FrameworkEnumResult<Self> {
        let config = Self::from_toml(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> FrameworkEnumResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FrameworkEnumError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded framework enum config");
        Self::load(&content)
    }

    /// Reject empty names and rule names that would alias each other.
    pub fn validate(&self) -> FrameworkEnumResult<()> {
        let named = [
            ("general_table", &self.general_table),
            ("identifier_property", &self.identifier_property),
            ("framework_property", &self.framework_property),
            ("display_name_property", &self.display_name_property),
            ("families.net_core_app", &self.families.net_core_app),
            ("families.net_framework", &self.families.net_framework),
            ("families.net_standard", &self.families.net_standard),
            ("capability", &self.capability),
        ];
        if let Some((field, _)) = named.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FrameworkEnumError::Config(format!("{field} must not be empty")));
        }

        let tables = self.rule_names();
        for (i, name) in tables.iter().enumerate() {
            if tables[..i].contains(name) {
                return Err(FrameworkEnumError::Config(format!(
                    "rule name '{name}' is bound more than once"
                )));
            }
        }
        Ok(())
    }

    /// Every rule a host must deliver: the three family rules, then the general rule.
    pub fn rule_names(&self) -> [&str; 4] {
        [
            self.families.net_core_app.as_str(),
            self.families.net_framework.as_str(),
            self.families.net_standard.as_str(),
            self.general_table.as_str(),
        ]
    }
}
