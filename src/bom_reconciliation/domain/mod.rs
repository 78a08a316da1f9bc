pub mod bom;
pub mod bom_update;
pub mod conflict;
pub mod dependency_index;
pub mod manifest;

pub use bom::{alternatives, Bom, VERSION_SEPARATOR};
pub use bom_update::{BomUpdate, UpdateTarget};
pub use conflict::{Conflict, DependencyConflict};
pub use dependency_index::{DependencyIndex, VersionIndex};
pub use manifest::{DependencyKind, DependencyMap, LocatedManifest, Manifest, ManifestId};
