use super::manifest_loader::load_manifests;
use crate::application::dto::{BomRequest, PruneResponse};
use crate::bom_reconciliation::domain::Manifest;
use crate::bom_reconciliation::services::BomPruner;
use crate::ports::outbound::{BomRepository, ManifestReader, ProgressReporter};
use crate::shared::Result;

/// PruneBomUseCase - drops BOM entries shared by fewer than two manifests
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `BR` - BomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct PruneBomUseCase<MR, BR, PR> {
    manifest_reader: MR,
    bom_repository: BR,
    progress_reporter: PR,
}

impl<MR, BR, PR> PruneBomUseCase<MR, BR, PR>
where
    MR: ManifestReader,
    BR: BomRepository,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, bom_repository: BR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            bom_repository,
            progress_reporter,
        }
    }

    /// Prunes the BOM against the requested manifests
    ///
    /// Nothing is pruned when a manifest is missing: its dependencies would
    /// otherwise look unreferenced.
    pub fn execute(&self, request: BomRequest) -> Result<PruneResponse> {
        self.progress_reporter
            .report(&format!("📖 Using BOM {}", request.bom_path.display()));
        let bom = self.bom_repository.read_bom(&request.bom_path)?;

        let loaded = load_manifests(
            &self.manifest_reader,
            &self.progress_reporter,
            &request.manifest_paths,
        )?;

        if !loaded.missing.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Skipping prune: some package files are missing");
            return Ok(PruneResponse {
                bom_path: request.bom_path,
                pruned: Vec::new(),
                written: false,
                missing: loaded.missing,
                skipped: true,
            });
        }

        let manifests: Vec<Manifest> = loaded
            .found
            .into_iter()
            .map(|(_, located)| located.manifest().clone())
            .collect();
        let result = BomPruner::prune(&bom, &manifests);

        let pruned: Vec<String> = bom
            .names()
            .filter(|name| !result.patched_bom.contains(name))
            .map(str::to_string)
            .collect();

        let written = result.count > 0;
        if written {
            self.bom_repository
                .write_bom(&request.bom_path, &result.patched_bom)?;
            self.progress_reporter.report_completion(&format!(
                "✅ Pruned {} dependencies from {}",
                result.count,
                request.bom_path.display()
            ));
        }

        Ok(PruneResponse {
            bom_path: request.bom_path,
            pruned,
            written,
            missing: Vec::new(),
            skipped: false,
        })
    }
}
