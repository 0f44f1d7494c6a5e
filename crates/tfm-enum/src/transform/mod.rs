//! Snapshot → ordered enum values.
//!
//! The general rule's `TargetFrameworkIdentifier` picks one of three
//! supported-frameworks rules. Its items are mapped to [`ValueEntry`]s and
//! sorted. An unrecognized identifier skips table lookup entirely and echoes the
//! project's own `TargetFramework` moniker, if it has one.

pub mod mapper;
pub mod order;

use tfm_core::{
    FrameworkEnumConfig, FrameworkEnumError, FrameworkEnumResult, FrameworkFamily, RuleTable,
    SnapshotSource, ValueEntry,
};
use tracing::{debug, trace};

use self::mapper::RowMapper;
use self::order::EntryOrder;

/// Rule and property names that drive table selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRules {
    pub general_table: String,
    pub identifier_property: String,
    pub framework_property: String,
    bindings: [(FrameworkFamily, String); 3],
}

/// Outcome of classifying the general rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Identifier recognized: enumerate this supported-frameworks rule.
    Table {
        family: FrameworkFamily,
        table: &'a str,
    },
    /// Identifier unrecognized: echo the free-form moniker, if any.
    Fallback { target_framework: Option<&'a str> },
}

impl SelectionRules {
    pub fn from_config(config: &FrameworkEnumConfig) -> Self {
        let bindings = FrameworkFamily::ALL
            .map(|family| (family, config.families.table_for(family).to_string()));
        Self {
            general_table: config.general_table.clone(),
            identifier_property: config.identifier_property.clone(),
            framework_property: config.framework_property.clone(),
            bindings,
        }
    }

    /// Rule name bound to `family`.
    pub fn table_for(&self, family: FrameworkFamily) -> &str {
        self.bindings
            .iter()
            .find_map(|(f, table)| (*f == family).then_some(table.as_str()))
            .unwrap_or_default()
    }

    /// Every rule a host must deliver: the three family rules, then the general rule.
    pub fn rule_names(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .map(|(_, table)| table.as_str())
            .chain(std::iter::once(self.general_table.as_str()))
            .collect()
    }

    /// Classify the general rule without touching any other table.
    pub fn select<'a>(&'a self, general: &'a RuleTable) -> Selection<'a> {
        let identifier = general.property(&self.identifier_property);
        match FrameworkFamily::classify(identifier) {
            Some(family) => Selection::Table {
                family,
                table: self.table_for(family),
            },
            None => Selection::Fallback {
                target_framework: general
                    .property(&self.framework_property)
                    .filter(|tf| !tf.is_empty()),
            },
        }
    }
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self::from_config(&FrameworkEnumConfig::default())
    }
}

/// Enumerate the valid target frameworks in `snapshot`.
///
/// Fails with `MissingRequiredTable` when the general rule, or the rule the
/// identifier selects, is absent. Mapper errors abort the whole call.
pub fn transform_with<S, M, O>(
    snapshot: &S,
    rules: &SelectionRules,
    mapper: &M,
    order: &O,
) -> FrameworkEnumResult<Vec<ValueEntry>>
where
    S: SnapshotSource + ?Sized,
    M: RowMapper + ?Sized,
    O: EntryOrder + ?Sized,
{
    let general = require_table(snapshot, &rules.general_table)?;

    let (family, table_name) = match rules.select(general) {
        Selection::Fallback { target_framework } => {
            debug!(
                target_framework = target_framework.unwrap_or(""),
                "Unrecognized framework identifier, using project moniker"
            );
            return Ok(target_framework.map(ValueEntry::verbatim).into_iter().collect());
        }
        Selection::Table { family, table } => (family, table),
    };

    let table = require_table(snapshot, table_name)?;
    let mut entries = Vec::with_capacity(table.len());
    for (key, properties) in table.rows() {
        let entry = mapper.map_row(table_name, key, properties)?;
        trace!(name = %entry.name, display_name = %entry.display_name, "Mapped framework");
        entries.push(entry);
    }
    entries.sort_by(|a, b| order.compare(a, b));

    debug!(%family, table = table_name, count = entries.len(), "Enumerated supported frameworks");
    Ok(entries)
}

fn require_table<'s, S>(snapshot: &'s S, name: &str) -> FrameworkEnumResult<&'s RuleTable>
where
    S: SnapshotSource + ?Sized,
{
    snapshot
        .table(name)
        .ok_or_else(|| FrameworkEnumError::missing_table(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfm_core::RuleSnapshot;

    fn general(identifier: Option<&str>, framework: Option<&str>) -> RuleTable {
        let mut table = RuleTable::new();
        if let Some(id) = identifier {
            table.set_property("TargetFrameworkIdentifier", id);
        }
        if let Some(tf) = framework {
            table.set_property("TargetFramework", tf);
        }
        table
    }

    #[test]
    fn select_recognized_identifier() {
        let rules = SelectionRules::default();
        let g = general(Some(".NETStandard"), Some("netstandard2.0"));
        assert_eq!(
            rules.select(&g),
            Selection::Table {
                family: FrameworkFamily::NetStandard,
                table: "SupportedNETStandardTargetFramework",
            }
        );
    }

    #[test]
    fn select_falls_back_without_identifier() {
        let rules = SelectionRules::default();
        assert_eq!(
            rules.select(&general(None, Some("net5.0"))),
            Selection::Fallback {
                target_framework: Some("net5.0")
            }
        );
        assert_eq!(
            rules.select(&general(Some("Unity"), Some(""))),
            Selection::Fallback {
                target_framework: None
            }
        );
    }

    #[test]
    fn rule_names_match_config_order() {
        let rules = SelectionRules::default();
        assert_eq!(
            rules.rule_names(),
            FrameworkEnumConfig::default().rule_names().to_vec()
        );
    }

    #[test]
    fn fallback_never_reads_family_tables() {
        // No family tables at all: a recognized identifier would fault here.
        let snapshot = RuleSnapshot::new()
            .with_table("ConfigurationGeneral", general(Some("Foo"), Some("foo1.0")));
        let out = transform_with(
            &snapshot,
            &SelectionRules::default(),
            &mapper::DisplayNameMapper::default(),
            &order::NaturalDisplayOrder,
        )
        .unwrap();
        assert_eq!(out, vec![ValueEntry::verbatim("foo1.0")]);
    }
}
