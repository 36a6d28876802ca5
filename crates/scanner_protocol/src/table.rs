//! The run-scoped metadata table populated during exploration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::DeclarationKey;

/// One structural declaration found on a compiled type.
///
/// The `values` payload is opaque to the discovery core: scanners store
/// whatever key/value data the declaration carried, and the downstream
/// loader interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Fully qualified name of the compiled type carrying the declaration.
    pub owner: String,

    /// The declared member (method or field) the declaration is attached to,
    /// or `None` when it sits on the type itself.
    pub member: Option<String>,

    /// Arbitrary key/value data carried by the declaration.
    #[serde(default)]
    pub values: serde_json::Value,
}

impl MetadataEntry {
    /// Create an entry for a declaration on the type itself.
    #[must_use]
    pub fn on_type(owner: impl Into<String>, values: serde_json::Value) -> Self {
        Self {
            owner: owner.into(),
            member: None,
            values,
        }
    }

    /// Create an entry for a declaration on a member of the type.
    #[must_use]
    pub fn on_member(
        owner: impl Into<String>,
        member: impl Into<String>,
        values: serde_json::Value,
    ) -> Self {
        Self {
            owner: owner.into(),
            member: Some(member.into()),
            values,
        }
    }
}

/// Append-only, multi-valued index of structural declarations.
///
/// The table associates a [`DeclarationKey`] (a kind of declaration) with
/// every `(owner type, payload)` pair found across all candidates explored
/// so far in one discovery run. It is the only channel through which
/// information crosses candidate boundaries.
///
/// **Contract**:
/// - Entries are only ever appended, never removed or overwritten.
/// - Within one key, entries keep the order they were recorded in, which is
///   candidate-exploration order across the run.
/// - Duplicate entries under the same key and owner are all retained; the
///   table is multi-valued by design.
///
/// One instance exists per discovery run. It is created empty when the
/// discoverer is constructed, mutated by every exploration step, and read
/// only from the point the run completes (or aborts - the table then
/// reflects exactly the candidates that finished exploring).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MetadataTable {
    entries: HashMap<DeclarationKey, Vec<MetadataEntry>>,
}

impl MetadataTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry under the given declaration key.
    pub fn record(&mut self, key: DeclarationKey, entry: MetadataEntry) {
        self.entries.entry(key).or_default().push(entry);
    }

    /// All entries recorded under `key`, in append order.
    ///
    /// Returns an empty slice for keys never recorded.
    #[must_use]
    pub fn get(&self, key: &DeclarationKey) -> &[MetadataEntry] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every declaration key the table has entries for.
    ///
    /// Key iteration order is unspecified; entry order within a key is not.
    pub fn keys(&self) -> impl Iterator<Item = &DeclarationKey> {
        self.entries.keys()
    }

    /// Total number of entries across all keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns true when no entry has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> DeclarationKey {
        DeclarationKey::new(s).unwrap()
    }

    #[test]
    fn entries_keep_append_order_within_a_key() {
        let mut table = MetadataTable::new();
        table.record(key("marker.X"), MetadataEntry::on_type("a.First", json!({})));
        table.record(key("marker.X"), MetadataEntry::on_type("b.Second", json!({})));
        table.record(key("marker.X"), MetadataEntry::on_type("c.Third", json!({})));

        let owners: Vec<_> = table
            .get(&key("marker.X"))
            .iter()
            .map(|e| e.owner.as_str())
            .collect();
        assert_eq!(
            owners,
            vec!["a.First", "b.Second", "c.Third"],
            "entries must stay in append order"
        );
    }

    #[test]
    fn duplicates_under_same_key_and_owner_are_retained() {
        let mut table = MetadataTable::new();
        table.record(
            key("marker.X"),
            MetadataEntry::on_type("a.Type", json!({"n": 1})),
        );
        table.record(
            key("marker.X"),
            MetadataEntry::on_type("a.Type", json!({"n": 2})),
        );

        let entries = table.get(&key("marker.X"));
        assert_eq!(entries.len(), 2, "the table is multi-valued, not a map");
        assert_eq!(entries[0].values["n"], 1);
        assert_eq!(entries[1].values["n"], 2);
    }

    #[test]
    fn unknown_key_yields_empty_slice() {
        let table = MetadataTable::new();
        assert!(table.get(&key("never.Recorded")).is_empty());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn member_entries_carry_the_member_name() {
        let mut table = MetadataTable::new();
        table.record(
            key("marker.Handler"),
            MetadataEntry::on_member("a.Type", "onLoad", json!({})),
        );

        let entries = table.get(&key("marker.Handler"));
        assert_eq!(entries[0].member.as_deref(), Some("onLoad"));
    }
}
