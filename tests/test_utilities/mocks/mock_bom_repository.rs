use bomlint::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock BomRepository holding a single BOM
#[derive(Clone)]
pub struct MockBomRepository {
    bom: Arc<Mutex<Option<Bom>>>,
    writes: Arc<Mutex<usize>>,
}

impl MockBomRepository {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            bom: Arc::new(Mutex::new(Some(entries.iter().copied().collect()))),
            writes: Arc::new(Mutex::new(0)),
        }
    }

    /// A repository without a BOM: every read fails
    pub fn missing() -> Self {
        Self {
            bom: Arc::new(Mutex::new(None)),
            writes: Arc::new(Mutex::new(0)),
        }
    }

    pub fn current(&self) -> Option<Bom> {
        self.bom.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl BomRepository for MockBomRepository {
    fn read_bom(&self, path: &Path) -> Result<Bom> {
        self.bom
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("BOM file not found: {}", path.display()))
    }

    fn write_bom(&self, _path: &Path, bom: &Bom) -> Result<()> {
        *self.bom.lock().unwrap() = Some(bom.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
