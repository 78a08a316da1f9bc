//! In-memory port implementations shared by the use case tests

use crate::bom_reconciliation::domain::{Bom, Manifest};
use crate::ports::outbound::{BomRepository, ManifestReader, ManifestWriter, ProgressReporter};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Manifest and BOM storage keyed by path
#[derive(Default)]
pub struct MockStore {
    manifests: RefCell<HashMap<PathBuf, Manifest>>,
    broken: HashSet<PathBuf>,
    boms: RefCell<HashMap<PathBuf, Bom>>,
    manifest_writes: RefCell<Vec<PathBuf>>,
    bom_writes: RefCell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(self, path: &str, manifest: Manifest) -> Self {
        self.manifests.borrow_mut().insert(PathBuf::from(path), manifest);
        self
    }

    pub fn with_broken(mut self, path: &str) -> Self {
        self.broken.insert(PathBuf::from(path));
        self
    }

    pub fn with_bom(self, path: &str, bom: Bom) -> Self {
        self.boms.borrow_mut().insert(PathBuf::from(path), bom);
        self
    }

    pub fn manifest(&self, path: &str) -> Option<Manifest> {
        self.manifests.borrow().get(Path::new(path)).cloned()
    }

    pub fn bom(&self, path: &str) -> Option<Bom> {
        self.boms.borrow().get(Path::new(path)).cloned()
    }

    pub fn manifest_writes(&self) -> Vec<PathBuf> {
        self.manifest_writes.borrow().clone()
    }

    pub fn bom_writes(&self) -> usize {
        *self.bom_writes.borrow()
    }
}

impl ManifestReader for MockStore {
    fn read_manifest(&self, path: &Path) -> Result<Option<Manifest>> {
        if self.broken.contains(path) {
            anyhow::bail!("malformed manifest: {}", path.display());
        }
        Ok(self.manifests.borrow().get(path).cloned())
    }
}

impl ManifestWriter for MockStore {
    fn write_manifest(&self, path: &Path, manifest: &Manifest) -> Result<()> {
        self.manifests
            .borrow_mut()
            .insert(path.to_path_buf(), manifest.clone());
        self.manifest_writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

impl BomRepository for MockStore {
    fn read_bom(&self, path: &Path) -> Result<Bom> {
        self.boms
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("BOM file not found: {}", path.display()))
    }

    fn write_bom(&self, path: &Path, bom: &Bom) -> Result<()> {
        self.boms.borrow_mut().insert(path.to_path_buf(), bom.clone());
        *self.bom_writes.borrow_mut() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
