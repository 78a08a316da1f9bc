use crate::bom_reconciliation::domain::Bom;
use crate::shared::Result;
use std::path::Path;

/// BomRepository port for loading and storing the Bill of Materials
pub trait BomRepository {
    /// Reads the BOM at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The BOM file does not exist
    /// - The content is not a flat JSON object of strings
    fn read_bom(&self, path: &Path) -> Result<Bom>;

    /// Replaces the BOM at `path` with `bom`
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails
    fn write_bom(&self, path: &Path, bom: &Bom) -> Result<()>;
}

impl<T: BomRepository + ?Sized> BomRepository for &T {
    fn read_bom(&self, path: &Path) -> Result<Bom> {
        (**self).read_bom(path)
    }

    fn write_bom(&self, path: &Path, bom: &Bom) -> Result<()> {
        (**self).write_bom(path, bom)
    }
}
