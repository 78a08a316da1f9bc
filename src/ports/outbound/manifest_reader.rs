use crate::bom_reconciliation::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading package manifests
pub trait ManifestReader {
    /// Reads and parses the manifest at `path`
    ///
    /// # Returns
    /// `Ok(None)` if no file exists at `path`. A missing manifest is a
    /// reportable finding, not an error.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read (permissions, not a regular file, too large)
    /// - The content is not a valid manifest JSON object
    fn read_manifest(&self, path: &Path) -> Result<Option<Manifest>>;
}

impl<T: ManifestReader + ?Sized> ManifestReader for &T {
    fn read_manifest(&self, path: &Path) -> Result<Option<Manifest>> {
        (**self).read_manifest(path)
    }
}
