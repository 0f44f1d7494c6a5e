//! Enum value providers and the registry hosts attach them through.

pub mod registry;
pub mod supported;

use tfm_core::{FrameworkEnumResult, SnapshotSource, ValueEntry};

/// Produces the valid values of one enum-typed project property.
///
/// Implementations are stateless between calls: every snapshot is transformed
/// from scratch, and concurrent calls on distinct snapshots need no locking.
pub trait FrameworkEnumProvider: Send + Sync {
    /// Registration name, unique within a [`registry::ProviderRegistry`].
    fn name(&self) -> &str;

    /// Rules the host must include in every snapshot it delivers.
    fn rule_names(&self) -> Vec<&str>;

    /// Whether the provider applies to a project with these capabilities.
    fn applies_to(&self, capabilities: &[&str]) -> bool;

    /// Compute the ordered value list. Integrity faults fail the whole call.
    fn transform(&self, snapshot: &dyn SnapshotSource) -> FrameworkEnumResult<Vec<ValueEntry>>;
}
