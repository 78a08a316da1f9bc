use crate::bom_reconciliation::domain::{Bom, Manifest};

/// Minimum number of manifests that must reference an entry for it to stay
const MIN_REFERENCING_MANIFESTS: usize = 2;

/// Result of pruning the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct PruneResult {
    pub patched_bom: Bom,
    /// Number of entries dropped
    pub count: usize,
}

/// BomPruner service
///
/// Drops BOM entries that fewer than two of the supplied manifests reference.
/// Pruning only compares across manifests: with fewer than two it is a no-op.
pub struct BomPruner;

impl BomPruner {
    pub fn prune(bom: &Bom, manifests: &[Manifest]) -> PruneResult {
        if manifests.len() < MIN_REFERENCING_MANIFESTS {
            return PruneResult {
                patched_bom: bom.clone(),
                count: 0,
            };
        }

        let mut patched_bom = bom.clone();
        patched_bom.retain(|name, _| Self::reference_count(name, manifests) >= MIN_REFERENCING_MANIFESTS);
        let count = bom.len() - patched_bom.len();

        PruneResult { patched_bom, count }
    }

    /// Number of manifests referencing `name` in any of their maps
    pub fn reference_count(name: &str, manifests: &[Manifest]) -> usize {
        manifests
            .iter()
            .filter(|manifest| manifest.references(name))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_reconciliation::domain::DependencyKind;

    fn bom(entries: &[(&str, &str)]) -> Bom {
        entries.iter().copied().collect()
    }

    fn regular(entries: &[(&str, &str)]) -> Manifest {
        Manifest::new().with_dependencies(DependencyKind::Regular, entries.iter().copied())
    }

    #[test]
    fn test_empty_prune() {
        let result = BomPruner::prune(&Bom::new(), &[]);
        assert_eq!(result.patched_bom, Bom::new());
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_empty_bom() {
        let result = BomPruner::prune(&Bom::new(), &[regular(&[("foo", "13")])]);
        assert_eq!(result.patched_bom, Bom::new());
    }

    #[test]
    fn test_no_manifests_is_noop() {
        let original = bom(&[("foo", "13")]);
        let result = BomPruner::prune(&original, &[]);
        assert_eq!(
            result,
            PruneResult {
                patched_bom: original,
                count: 0
            }
        );
    }

    #[test]
    fn test_single_manifest_is_noop() {
        let original = bom(&[("foo", "13"), ("bar", "1")]);
        let result = BomPruner::prune(&original, &[regular(&[("foo", "13")])]);
        assert_eq!(result.patched_bom, original);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_nothing_to_prune() {
        let original = bom(&[("foo", "13")]);
        let manifests = [regular(&[("foo", "13")]), regular(&[("foo", "13")])];
        let result = BomPruner::prune(&original, &manifests);
        assert_eq!(
            result,
            PruneResult {
                patched_bom: original,
                count: 0
            }
        );
    }

    #[test]
    fn test_prune_it() {
        let original = bom(&[("foo", "13"), ("gnu", "1313"), ("bar", "0")]);
        let manifests = [
            regular(&[("foo", "13")]),
            Manifest::new().with_dependencies(DependencyKind::Peer, [("foo", "13"), ("gnu", "1313")]),
        ];

        let result = BomPruner::prune(&original, &manifests);

        assert_eq!(
            result,
            PruneResult {
                patched_bom: bom(&[("foo", "13")]),
                count: 2
            }
        );
    }

    #[test]
    fn test_one_manifest_referencing_twice_counts_once() {
        let original = bom(&[("foo", "1")]);
        let manifests = [
            Manifest::new()
                .with_dependencies(DependencyKind::Regular, [("foo", "1")])
                .with_dependencies(DependencyKind::Dev, [("foo", "1")]),
            regular(&[("bar", "1")]),
        ];

        let result = BomPruner::prune(&original, &manifests);

        assert_eq!(BomPruner::reference_count("foo", &manifests), 1);
        assert!(result.patched_bom.is_empty());
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_prune_never_grows_and_keeps_order() {
        let original = bom(&[("c", "1"), ("a", "1"), ("b", "1")]);
        let manifests = [regular(&[("a", "1"), ("c", "1")]), regular(&[("c", "2"), ("a", "2")])];

        let result = BomPruner::prune(&original, &manifests);

        assert!(result.patched_bom.len() <= original.len());
        assert_eq!(result.patched_bom.names().collect::<Vec<_>>(), vec!["c", "a"]);
    }
}
