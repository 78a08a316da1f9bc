use crate::bom_reconciliation::domain::{Bom, BomUpdate, DependencyKind, Manifest, UpdateTarget};

/// Map check order within a single BOM entry
const CHECK_ORDER: [DependencyKind; 3] = [
    DependencyKind::Regular,
    DependencyKind::Peer,
    DependencyKind::Dev,
];

/// Result of checking one manifest against the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub updates: Vec<BomUpdate>,
    /// The manifest with every update applied; equal to the input when
    /// `updates` is empty
    pub patched_manifest: Manifest,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn update_labels(&self) -> Vec<String> {
        self.updates.iter().map(BomUpdate::label).collect()
    }
}

/// BomChecker service
///
/// Compares a manifest's dependency maps and its own name/version against
/// the BOM and computes the patched manifest. The input is never mutated;
/// maps without updates stay shared with it.
pub struct BomChecker;

impl BomChecker {
    /// Checks `manifest` against every BOM entry
    ///
    /// Updates are ordered by BOM entry, then `dependencies`, `peerDependencies`,
    /// `devDependencies` and finally the manifest's own version. Undeclared
    /// dependencies are never flagged.
    pub fn check(bom: &Bom, manifest: &Manifest) -> CheckResult {
        let mut updates = Vec::new();
        let mut patched_manifest = manifest.clone();

        for (name, approved) in bom.iter() {
            for kind in CHECK_ORDER {
                if let Some(current) = manifest.declared_version(kind, name) {
                    if current != approved {
                        updates.push(BomUpdate::new(
                            name,
                            UpdateTarget::Dependency(kind),
                            Some(current),
                            approved,
                        ));
                        patched_manifest.set_dependency_version(kind, name, approved);
                    }
                }
            }

            if manifest.name() == Some(name) && manifest.version() != Some(approved) {
                updates.push(BomUpdate::new(
                    name,
                    UpdateTarget::SelfVersion,
                    manifest.version(),
                    approved,
                ));
                patched_manifest.set_version(approved);
            }
        }

        CheckResult {
            updates,
            patched_manifest,
        }
    }
}
