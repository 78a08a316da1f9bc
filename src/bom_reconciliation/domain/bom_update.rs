use super::DependencyKind;
use std::fmt;

/// What a BOM update applies to within a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTarget {
    /// An entry of one of the three dependency maps
    Dependency(DependencyKind),
    /// The manifest's own `version`, when its `name` is governed by the BOM
    SelfVersion,
}

impl UpdateTarget {
    /// Label suffix appended to the dependency name in reports
    pub fn suffix(self) -> &'static str {
        match self {
            UpdateTarget::Dependency(DependencyKind::Regular) => "",
            UpdateTarget::Dependency(DependencyKind::Peer) => " (peer)",
            UpdateTarget::Dependency(DependencyKind::Dev) => " (dev)",
            UpdateTarget::SelfVersion => " (self)",
        }
    }
}

/// A single mismatch between a manifest and the BOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomUpdate {
    pub dependency: String,
    pub target: UpdateTarget,
    /// Version found in the manifest (`None` for a missing self version)
    pub current: Option<String>,
    /// Version approved by the BOM
    pub approved: String,
}

impl BomUpdate {
    pub fn new(
        dependency: impl Into<String>,
        target: UpdateTarget,
        current: Option<&str>,
        approved: impl Into<String>,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            target,
            current: current.map(str::to_string),
            approved: approved.into(),
        }
    }

    /// Report label, e.g. `react (peer)`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BomUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dependency, self.target.suffix())
    }
}
