use super::DependencyIndexBuilder;
use crate::bom_reconciliation::domain::{Conflict, DependencyConflict, DependencyIndex, LocatedManifest};
use crate::bom_reconciliation::policies::ConflictAllowList;

/// ConflictDetector service
///
/// Reports dependencies declared with more than one distinct version across
/// a manifest set. Works on map slots: one manifest declaring a dependency
/// at different versions in two maps is a conflict on its own.
pub struct ConflictDetector;

impl ConflictDetector {
    /// Detects conflicts across `manifests`, ignoring allow-listed names
    pub fn detect(manifests: &[LocatedManifest], allow_list: &ConflictAllowList) -> Vec<Conflict> {
        let index = DependencyIndexBuilder::build(manifests, allow_list);
        Self::detect_in_index(&index)
    }

    /// Detects conflicts in an already built index
    ///
    /// Conflicts follow first-observed dependency order; entries within a
    /// conflict follow first-observed version order, then manifest order.
    pub fn detect_in_index(index: &DependencyIndex) -> Vec<Conflict> {
        index
            .iter()
            .filter(|(_, versions)| versions.len() > 1)
            .map(|(dependency, versions)| Conflict {
                dependency: dependency.to_string(),
                conflicts: versions
                    .iter()
                    .flat_map(|(version, manifests)| {
                        manifests
                            .iter()
                            .map(move |manifest| DependencyConflict::new(manifest.clone(), version.as_str()))
                    })
                    .collect(),
            })
            .collect()
    }
}
