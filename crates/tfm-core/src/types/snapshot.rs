//! RuleSnapshot: point-in-time view of evaluated project rules.
//!
//! A snapshot maps rule names to tables. Each table carries flat rule-level
//! properties plus an ordered list of items (key + metadata). The provider only
//! ever reads through [`SnapshotSource`]; hosts with their own storage can
//! implement that trait instead of building a [`RuleSnapshot`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::collections::FxHashMap;
use crate::errors::FrameworkEnumResult;

/// Metadata attached to a single rule item.
pub type RowProperties = FxHashMap<String, String>;

/// Read-only access to the tables of a configuration snapshot.
pub trait SnapshotSource {
    /// Look up a rule table by name.
    fn table(&self, name: &str) -> Option<&RuleTable>;
}

/// One evaluated rule: rule-level properties plus ordered items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    properties: FxHashMap<String, String>,
    items: OrderedRows,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Builder-style row insertion.
    pub fn with_row<I, K, V>(mut self, key: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let props = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.insert_row(key, props);
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Rule-level property value, if evaluated.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Insert a row. An existing row with the same key is replaced in place,
    /// keeping its original position.
    pub fn insert_row(&mut self, key: impl Into<String>, properties: RowProperties) {
        self.items.insert(key.into(), properties);
    }

    pub fn get_row(&self, key: &str) -> Option<&RowProperties> {
        self.items
            .index
            .get(key)
            .map(|&slot| &self.items.rows[slot].1)
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = (&str, &RowProperties)> + '_ {
        self.items.rows.iter().map(|(k, props)| (k.as_str(), props))
    }

    pub fn len(&self) -> usize {
        self.items.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.rows.is_empty()
    }
}

/// Owned snapshot keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSnapshot {
    tables: FxHashMap<String, RuleTable>,
}

impl RuleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from its JSON form:
    /// `{ "<rule>": { "properties": {..}, "items": { "<key>": {..} } } }`.
    pub fn from_json(json: &str) -> FrameworkEnumResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_table(mut self, name: impl Into<String>, table: RuleTable) -> Self {
        self.insert_table(name, table);
        self
    }

    pub fn insert_table(&mut self, name: impl Into<String>, table: RuleTable) -> Option<RuleTable> {
        self.tables.insert(name.into(), table)
    }

    pub fn remove_table(&mut self, name: &str) -> Option<RuleTable> {
        self.tables.remove(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl SnapshotSource for RuleSnapshot {
    fn table(&self, name: &str) -> Option<&RuleTable> {
        self.tables.get(name)
    }
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for &S {
    fn table(&self, name: &str) -> Option<&RuleTable> {
        (**self).table(name)
    }
}

// ── Ordered items ──
//
// Items are written as a JSON/TOML map, but map order is the evaluation order
// of the rule and must survive a round trip. `index` maps each key to its slot
// in `rows`.

#[derive(Debug, Clone, Default)]
struct OrderedRows {
    rows: Vec<(String, RowProperties)>,
    index: FxHashMap<String, usize>,
}

impl OrderedRows {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Append `key`, or overwrite its properties in place if already present.
    fn insert(&mut self, key: String, properties: RowProperties) {
        match self.index.get(&key) {
            Some(&slot) => self.rows[slot].1 = properties,
            None => {
                self.index.insert(key.clone(), self.rows.len());
                self.rows.push((key, properties));
            }
        }
    }
}

impl PartialEq for OrderedRows {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Serialize for OrderedRows {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (key, props) in &self.rows {
            map.serialize_entry(key, props)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OrderedRows {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowsVisitor;

        impl<'de> Visitor<'de> for RowsVisitor {
            type Value = OrderedRows;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of item keys to property maps")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rows = OrderedRows::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, props)) = access.next_entry::<String, RowProperties>()? {
                    rows.insert(key, props);
                }
                Ok(rows)
            }
        }

        deserializer.deserialize_map(RowsVisitor)
    }
}
