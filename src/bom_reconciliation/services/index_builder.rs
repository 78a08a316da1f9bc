use crate::bom_reconciliation::domain::{DependencyIndex, LocatedManifest};
use crate::bom_reconciliation::policies::ConflictAllowList;

/// DependencyIndexBuilder service
///
/// Pure: folds the dependency maps of a manifest set into a [`DependencyIndex`].
pub struct DependencyIndexBuilder;

impl DependencyIndexBuilder {
    /// Builds the index of every declaration in `manifests`
    ///
    /// Maps are scanned per manifest in the order `dependencies`,
    /// `devDependencies`, `peerDependencies`. Allow-listed names are skipped.
    pub fn build(manifests: &[LocatedManifest], allow_list: &ConflictAllowList) -> DependencyIndex {
        manifests
            .iter()
            .fold(DependencyIndex::new(), |mut index, located| {
                Self::index_manifest(&mut index, located, allow_list);
                index
            })
    }

    /// Builds the index of a single manifest, e.g. to be merged later
    pub fn build_one(located: &LocatedManifest, allow_list: &ConflictAllowList) -> DependencyIndex {
        let mut index = DependencyIndex::new();
        Self::index_manifest(&mut index, located, allow_list);
        index
    }

    fn index_manifest(
        index: &mut DependencyIndex,
        located: &LocatedManifest,
        allow_list: &ConflictAllowList,
    ) {
        for (_, name, version) in located.manifest().declarations() {
            if !allow_list.allows(name) {
                index.insert(name, version, located.id());
            }
        }
    }
}
