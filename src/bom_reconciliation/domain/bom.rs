use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator joining alternative versions in a single BOM entry
pub const VERSION_SEPARATOR: &str = " || ";

/// Bill of Materials: the approved version of every governed dependency
///
/// Entries keep their insertion order so a rewritten BOM file diffs cleanly,
/// but equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bom {
    entries: IndexMap<String, String>,
}

impl Bom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or replaces an entry, returning the previous version
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), version.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the entries for which `keep` returns true, preserving order
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|name, version| keep(name, version));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bom {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, version)| (name.into(), version.into()))
                .collect(),
        }
    }
}

/// Splits a BOM version expression into its alternatives
///
/// `"1.0.0 || 2.0.0"` yields `"1.0.0"` and `"2.0.0"`; a plain version yields itself.
pub fn alternatives(expression: &str) -> impl Iterator<Item = &str> {
    expression.split(VERSION_SEPARATOR)
}
