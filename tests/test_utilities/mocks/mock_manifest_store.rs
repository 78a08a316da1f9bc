use bomlint::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory package files, readable and writable through the manifest ports
///
/// Clones share the same storage, so one clone can be handed to a use case as
/// reader and another as writer.
#[derive(Default, Clone)]
pub struct MockManifestStore {
    manifests: Arc<Mutex<HashMap<PathBuf, Manifest>>>,
    writes: Arc<Mutex<Vec<PathBuf>>>,
    should_fail: bool,
}

impl MockManifestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the parsed form of a package.json document
    pub fn with_json(self, path: &str, json: &str) -> Self {
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        self.manifests
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), manifest);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get(&self, path: &str) -> Option<Manifest> {
        self.manifests.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }
}

impl ManifestReader for MockManifestStore {
    fn read_manifest(&self, path: &Path) -> Result<Option<Manifest>> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(self.manifests.lock().unwrap().get(path).cloned())
    }
}

impl ManifestWriter for MockManifestStore {
    fn write_manifest(&self, path: &Path, manifest: &Manifest) -> Result<()> {
        self.manifests
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), manifest.clone());
        self.writes.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
