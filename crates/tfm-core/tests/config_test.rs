//! Config loading: TOML overrides, defaults for missing fields, file errors.

use std::io::Write;

use tfm_core::config::FrameworkEnumConfig;
use tfm_core::{FrameworkEnumError, FrameworkEnumErrorCode, FrameworkFamily};

#[test]
fn empty_toml_yields_defaults() {
    let config = FrameworkEnumConfig::from_toml("").unwrap();
    assert_eq!(config, FrameworkEnumConfig::default());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let toml = r#"
display_name_property = "FriendlyName"

[families]
net_standard = "CustomStandardFrameworks"
"#;
    let config = FrameworkEnumConfig::load(toml).unwrap();
    assert_eq!(config.display_name_property, "FriendlyName");
    assert_eq!(
        config.families.table_for(FrameworkFamily::NetStandard),
        "CustomStandardFrameworks"
    );
    assert_eq!(
        config.families.table_for(FrameworkFamily::NetCoreApp),
        "SupportedNETCoreAppTargetFramework"
    );
    assert_eq!(config.general_table, "ConfigurationGeneral");
}

#[test]
fn invalid_toml_maps_to_config_error() {
    let err = FrameworkEnumConfig::load("general_table = [1, 2]").unwrap_err();
    assert!(matches!(err, FrameworkEnumError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn load_validates_after_parsing() {
    let toml = r#"
[families]
net_core_app = "SupportedNETFrameworkTargetFramework"
"#;
    assert!(FrameworkEnumConfig::from_toml(toml).is_ok());
    assert!(FrameworkEnumConfig::load(toml).is_err());
}

#[test]
fn from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "capability = \"Managed\"").unwrap();

    let config = FrameworkEnumConfig::from_file(file.path()).unwrap();
    assert_eq!(config.capability, "Managed");
}

#[test]
fn from_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = FrameworkEnumConfig::from_file(&missing).unwrap_err();
    match err {
        FrameworkEnumError::Io { path, .. } => assert!(path.ends_with("absent.toml")),
        other => panic!("unexpected error: {other}"),
    }
}
