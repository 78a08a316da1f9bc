use super::ManifestId;
use indexmap::{IndexMap, IndexSet};

/// Version string to the manifests declaring it, in first-observed order
pub type VersionIndex = IndexMap<String, IndexSet<ManifestId>>;

/// DependencyIndex aggregate: dependency name -> version -> declaring manifests
///
/// Every level keeps first-observed order, which is what makes conflict
/// reports deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyIndex {
    entries: IndexMap<String, VersionIndex>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `manifest` declares `name` at `version`.
    ///
    /// Returns false if that exact declaration was already recorded.
    pub fn insert(&mut self, name: &str, version: &str, manifest: &ManifestId) -> bool {
        self.entries
            .entry(name.to_string())
            .or_default()
            .entry(version.to_string())
            .or_default()
            .insert(manifest.clone())
    }

    /// Union of two indices. Entries of `other` not yet present are appended
    /// after the existing ones.
    pub fn merge(&mut self, other: DependencyIndex) {
        for (name, versions) in other.entries {
            let target = self.entries.entry(name).or_default();
            for (version, manifests) in versions {
                target.entry(version).or_default().extend(manifests);
            }
        }
    }

    pub fn versions(&self, name: &str) -> Option<&VersionIndex> {
        self.entries.get(name)
    }

    /// Distinct versions observed for `name`, in first-observed order
    pub fn observed_versions(&self, name: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(name)
            .into_iter()
            .flat_map(|versions| versions.keys().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionIndex)> {
        self.entries
            .iter()
            .map(|(name, versions)| (name.as_str(), versions))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = DependencyIndex::new();
        let p1 = ManifestId::from("p1");

        assert!(index.insert("foo", "1", &p1));
        assert!(!index.insert("foo", "1", &p1));

        let versions = index.versions("foo").unwrap();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions["1"].len(), 1);
    }

    #[test]
    fn test_observed_versions_in_insertion_order() {
        let mut index = DependencyIndex::new();
        index.insert("foo", "2", &ManifestId::from("p1"));
        index.insert("foo", "1", &ManifestId::from("p2"));
        index.insert("foo", "2", &ManifestId::from("p3"));

        assert_eq!(index.observed_versions("foo").collect::<Vec<_>>(), vec!["2", "1"]);
        assert_eq!(index.observed_versions("bar").count(), 0);
    }

    #[test]
    fn test_merge_is_union() {
        let mut left = DependencyIndex::new();
        left.insert("foo", "1", &ManifestId::from("p1"));

        let mut right = DependencyIndex::new();
        right.insert("foo", "1", &ManifestId::from("p1"));
        right.insert("foo", "2", &ManifestId::from("p2"));
        right.insert("bar", "1", &ManifestId::from("p2"));

        left.merge(right);

        assert_eq!(left.len(), 2);
        let foo = left.versions("foo").unwrap();
        assert_eq!(foo["1"].iter().collect::<Vec<_>>(), vec![&ManifestId::from("p1")]);
        assert_eq!(foo["2"].iter().collect::<Vec<_>>(), vec![&ManifestId::from("p2")]);
        assert_eq!(left.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["foo", "bar"]);
    }
}
