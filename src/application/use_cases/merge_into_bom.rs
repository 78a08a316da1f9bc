use super::manifest_loader::load_manifests;
use crate::application::dto::{BomRequest, MergeResponse};
use crate::bom_reconciliation::services::BomMerger;
use crate::ports::outbound::{BomRepository, ManifestReader, ProgressReporter};
use crate::shared::Result;

/// MergeIntoBomUseCase - folds every observed version into the BOM
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `BR` - BomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct MergeIntoBomUseCase<MR, BR, PR> {
    manifest_reader: MR,
    bom_repository: BR,
    progress_reporter: PR,
}

impl<MR, BR, PR> MergeIntoBomUseCase<MR, BR, PR>
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

    /// Merges the found manifests into the BOM and rewrites it when its
    /// content changed
    pub fn execute(&self, request: BomRequest) -> Result<MergeResponse> {
        self.progress_reporter
            .report(&format!("📖 Using BOM {}", request.bom_path.display()));
        let bom = self.bom_repository.read_bom(&request.bom_path)?;

        let loaded = load_manifests(
            &self.manifest_reader,
            &self.progress_reporter,
            &request.manifest_paths,
        )?;

        let result = BomMerger::merge(&loaded.located(), &bom);
        let written = result.has_changes(&bom);
        if written {
            self.bom_repository
                .write_bom(&request.bom_path, &result.patched_bom)?;
            self.progress_reporter.report_completion(&format!(
                "✅ Merged {} and added {} dependencies into {}",
                result.count,
                result.added,
                request.bom_path.display()
            ));
        }

        Ok(MergeResponse {
            bom_path: request.bom_path,
            merged: result.count,
            added: result.added,
            written,
            missing: loaded.missing,
        })
    }
}
