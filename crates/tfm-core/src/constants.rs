//! Schema names of the evaluated project rules the enum provider reads.

/// Rule holding the project's general evaluated properties.
pub const CONFIGURATION_GENERAL: &str = "ConfigurationGeneral";

/// General property carrying the framework family identifier (e.g. `.NETCoreApp`).
pub const TARGET_FRAMEWORK_IDENTIFIER_PROPERTY: &str = "TargetFrameworkIdentifier";

/// General property carrying the free-form target framework moniker.
pub const TARGET_FRAMEWORK_PROPERTY: &str = "TargetFramework";

/// Item metadata holding the user-facing name of a supported framework.
pub const DISPLAY_NAME_PROPERTY: &str = "DisplayName";

pub const SUPPORTED_NET_CORE_APP_TARGET_FRAMEWORK: &str = "SupportedNETCoreAppTargetFramework";
pub const SUPPORTED_NET_FRAMEWORK_TARGET_FRAMEWORK: &str = "SupportedNETFrameworkTargetFramework";
pub const SUPPORTED_NET_STANDARD_TARGET_FRAMEWORK: &str = "SupportedNETStandardTargetFramework";

/// Registration name of the supported target frameworks provider.
pub const SUPPORTED_TARGET_FRAMEWORKS_PROVIDER: &str = "SupportedTargetFrameworksEnumProvider";

/// Project capability a project must carry for the provider to apply.
pub const DOT_NET_CAPABILITY: &str = "DotNet";
