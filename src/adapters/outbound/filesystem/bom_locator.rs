use std::path::{Path, PathBuf};

/// File name of the BOM searched for by [`BomLocator`]
pub const BOM_FILENAME: &str = ".bomlint.json";

/// BomLocator finds the BOM governing a directory
///
/// Walks from the start directory towards the filesystem root and stops after
/// checking the home directory. The home directory is injected so discovery
/// never depends on the process environment.
pub struct BomLocator {
    home: Option<PathBuf>,
}

impl BomLocator {
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// Returns the nearest `.bomlint.json` relative to `start` (for example
    /// `../../.bomlint.json`), or the relative default path when none exists
    /// between `start` and the search boundary
    pub fn locate(&self, start: &Path) -> PathBuf {
        let mut relative = PathBuf::new();
        let mut dir = Some(start);
        while let Some(current) = dir {
            if current.join(BOM_FILENAME).is_file() {
                return relative.join(BOM_FILENAME);
            }
            if self.home.as_deref() == Some(current) {
                break;
            }
            relative.push("..");
            dir = current.parent();
        }
        PathBuf::from(BOM_FILENAME)
    }
}
