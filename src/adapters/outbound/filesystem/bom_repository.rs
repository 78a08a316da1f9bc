use super::file_reader::{path_exists, safe_read_file};
use super::file_writer::{to_pretty_json, write_atomically};
use crate::bom_reconciliation::domain::Bom;
use crate::ports::outbound::BomRepository;
use crate::shared::error::BomlintError;
use crate::shared::Result;
use std::path::Path;

/// FileSystemBomRepository adapter storing the BOM as a flat JSON object
pub struct FileSystemBomRepository;

impl FileSystemBomRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemBomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BomRepository for FileSystemBomRepository {
    fn read_bom(&self, path: &Path) -> Result<Bom> {
        if !path_exists(path)? {
            return Err(BomlintError::BomNotFound {
                path: path.to_path_buf(),
                suggestion: "Create it (e.g. `echo '{}' > .bomlint.json`) and run `bomlint merge`, \
                             or point to an existing BOM with --bom"
                    .to_string(),
            }
            .into());
        }

        let content = safe_read_file(path, "BOM file")?;
        serde_json::from_str(&content).map_err(|e| {
            BomlintError::BomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn write_bom(&self, path: &Path, bom: &Bom) -> Result<()> {
        write_atomically(path, &to_pretty_json(bom)?)
    }
}
