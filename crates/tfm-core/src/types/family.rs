//! Framework families and identifier classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of framework families that have a supported-frameworks rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkFamily {
    NetCoreApp,
    NetFramework,
    NetStandard,
}

impl FrameworkFamily {
    pub const ALL: [FrameworkFamily; 3] = [
        FrameworkFamily::NetCoreApp,
        FrameworkFamily::NetFramework,
        FrameworkFamily::NetStandard,
    ];

    /// The `TargetFrameworkIdentifier` value naming this family.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::NetCoreApp => ".NETCoreApp",
            Self::NetFramework => ".NETFramework",
            Self::NetStandard => ".NETStandard",
        }
    }

    /// Classify an evaluated `TargetFrameworkIdentifier`.
    ///
    /// Accepts the identifier with or without its leading dot. Matching ignores
    /// case and never depends on the process locale.
    pub fn classify(identifier: Option<&str>) -> Option<Self> {
        let raw = identifier?;
        let raw = raw.strip_prefix('.').unwrap_or(raw);
        Self::ALL
            .into_iter()
            .find(|family| identifiers_equal(raw, &family.identifier()[1..]))
    }
}

impl fmt::Display for FrameworkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetCoreApp => write!(f, "NetCoreApp"),
            Self::NetFramework => write!(f, "NetFramework"),
            Self::NetStandard => write!(f, "NetStandard"),
        }
    }
}

/// Ordinal case-insensitive equality for framework identifiers.
///
/// Folds with Unicode lowercase mappings, which Rust applies identically on every
/// platform regardless of locale (no Turkish-I style surprises).
pub fn identifiers_equal(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
