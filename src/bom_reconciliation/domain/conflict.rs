use super::ManifestId;
use indexmap::IndexSet;
use std::fmt;

/// One side of a conflict: a manifest and the version it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyConflict {
    pub manifest: ManifestId,
    pub version: String,
}

impl DependencyConflict {
    pub fn new(manifest: impl Into<ManifestId>, version: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            version: version.into(),
        }
    }
}

/// A dependency declared with more than one distinct version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub dependency: String,
    pub conflicts: Vec<DependencyConflict>,
}

impl Conflict {
    /// Distinct versions involved, in report order
    pub fn versions(&self) -> Vec<&str> {
        self.conflicts
            .iter()
            .map(|conflict| conflict.version.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.dependency)?;
        for (i, conflict) in self.conflicts.iter().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{}{} ({})", separator, conflict.version, conflict.manifest)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Conflict {
        Conflict {
            dependency: "foo".to_string(),
            conflicts: vec![
                DependencyConflict::new("p1", "X"),
                DependencyConflict::new("p2", "Y"),
                DependencyConflict::new("p3", "X"),
            ],
        }
    }

    #[test]
    fn test_conflict_display() {
        assert_eq!(sample().to_string(), "foo: X (p1), Y (p2), X (p3)");
    }

    #[test]
    fn test_conflict_versions_deduplicated() {
        assert_eq!(sample().versions(), vec!["X", "Y"]);
    }

    #[test]
    fn test_conflict_versions_keep_first_seen_order() {
        let conflict = Conflict {
            dependency: "foo".to_string(),
            conflicts: vec![
                DependencyConflict::new("p1", "2"),
                DependencyConflict::new("p1", "1"),
                DependencyConflict::new("p2", "2"),
                DependencyConflict::new("p3", "3"),
            ],
        };
        assert_eq!(conflict.versions(), vec!["2", "1", "3"]);
    }
}
