//! # tfm-enum
//!
//! Produces the valid `TargetFramework` choices for a project from evaluated
//! rule snapshots.
//!
//! ## Modules
//! - `transform`: table selection, row mapping, natural ordering, fallback
//! - `provider`: `FrameworkEnumProvider` trait, the supported target frameworks
//!   provider, and the host-owned `ProviderRegistry`

pub mod provider;
pub mod transform;

pub use provider::registry::ProviderRegistry;
pub use provider::supported::SupportedTargetFrameworksProvider;
pub use provider::FrameworkEnumProvider;
pub use transform::{transform_with, Selection, SelectionRules};
pub use transform::mapper::{DisplayNameMapper, RowMapper};
pub use transform::order::{EntryOrder, NaturalDisplayOrder};
