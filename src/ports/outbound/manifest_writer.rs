use crate::bom_reconciliation::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestWriter port for persisting patched manifests
pub trait ManifestWriter {
    /// Replaces the manifest at `path` with `manifest`
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails
    fn write_manifest(&self, path: &Path, manifest: &Manifest) -> Result<()>;
}

impl<T: ManifestWriter + ?Sized> ManifestWriter for &T {
    fn write_manifest(&self, path: &Path, manifest: &Manifest) -> Result<()> {
        (**self).write_manifest(path, manifest)
    }
}
