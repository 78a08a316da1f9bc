use crate::bom_reconciliation::policies::ConflictAllowList;
use std::path::PathBuf;

/// CheckRequest - request DTO for the check / fix use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Manifest files to check, in report order
    pub manifest_paths: Vec<PathBuf>,
    /// Resolved BOM file
    pub bom_path: PathBuf,
    /// Dependencies whose divergent versions are accepted
    pub allow_list: ConflictAllowList,
    /// Write patched manifests instead of only reporting them
    pub fix: bool,
}

impl CheckRequest {
    pub fn new(
        manifest_paths: Vec<PathBuf>,
        bom_path: PathBuf,
        allow_list: ConflictAllowList,
        fix: bool,
    ) -> Self {
        Self {
            manifest_paths,
            bom_path,
            allow_list,
            fix,
        }
    }
}

/// BomRequest - request DTO for the use cases that rewrite the BOM (merge, prune)
#[derive(Debug, Clone)]
pub struct BomRequest {
    pub manifest_paths: Vec<PathBuf>,
    pub bom_path: PathBuf,
}

impl BomRequest {
    pub fn new(manifest_paths: Vec<PathBuf>, bom_path: PathBuf) -> Self {
        Self {
            manifest_paths,
            bom_path,
        }
    }
}
