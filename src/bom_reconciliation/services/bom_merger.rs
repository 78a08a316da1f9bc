use super::DependencyIndexBuilder;
use crate::bom_reconciliation::domain::{alternatives, Bom, LocatedManifest, VERSION_SEPARATOR};
use crate::bom_reconciliation::policies::ConflictAllowList;
use std::collections::BTreeSet;

/// Result of merging a manifest set into the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    pub patched_bom: Bom,
    /// Pre-existing entries folded with at least one observed version,
    /// whether or not their value changed
    pub count: usize,
    /// Entries inserted for dependencies the BOM did not know
    pub added: usize,
}

impl MergeResult {
    pub fn has_changes(&self, original: &Bom) -> bool {
        self.patched_bom != *original
    }
}

/// BomMerger service
///
/// Folds every version observed in a manifest set into the BOM. Existing
/// entries become the sorted union of their alternatives and the observed
/// versions; unknown dependencies are appended. Nothing is ever removed.
///
/// Both sides are split on `" || "` first, so a manifest range equal to the
/// BOM value leaves the entry untouched.
pub struct BomMerger;

impl BomMerger {
    pub fn merge(manifests: &[LocatedManifest], bom: &Bom) -> MergeResult {
        let index = DependencyIndexBuilder::build(manifests, &ConflictAllowList::new());
        let mut patched_bom = bom.clone();
        let mut count = 0;
        let mut added = 0;

        for (name, versions) in index.iter() {
            let observed = versions.keys().flat_map(|version| alternatives(version));
            match bom.get(name) {
                Some(existing) => {
                    patched_bom.insert(name, Self::union(alternatives(existing).chain(observed)));
                    count += 1;
                }
                None => {
                    patched_bom.insert(name, Self::union(observed));
                    added += 1;
                }
            }
        }

        MergeResult {
            patched_bom,
            count,
            added,
        }
    }

    /// Sorted, duplicate-free alternation of `versions`
    fn union<'a>(versions: impl Iterator<Item = &'a str>) -> String {
        versions
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(VERSION_SEPARATOR)
    }
}
