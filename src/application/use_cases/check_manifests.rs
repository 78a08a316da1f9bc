use super::manifest_loader::load_manifests;
use crate::application::dto::{CheckRequest, CheckResponse, ManifestReport};
use crate::bom_reconciliation::domain::LocatedManifest;
use crate::bom_reconciliation::services::{BomChecker, ConflictDetector};
use crate::ports::outbound::{BomRepository, ManifestReader, ManifestWriter, ProgressReporter};
use crate::shared::Result;

/// CheckManifestsUseCase - lints manifests against the BOM
///
/// Backs both `check` and `fix`: every manifest is compared with the BOM and,
/// in fix mode, rewritten with the approved versions. Conflicts are detected
/// across the whole manifest set afterwards.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `MW` - ManifestWriter implementation
/// * `BR` - BomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckManifestsUseCase<MR, MW, BR, PR> {
    manifest_reader: MR,
    manifest_writer: MW,
    bom_repository: BR,
    progress_reporter: PR,
}

impl<MR, MW, BR, PR> CheckManifestsUseCase<MR, MW, BR, PR>
where
    MR: ManifestReader,
    MW: ManifestWriter,
    BR: BomRepository,
    PR: ProgressReporter,
{
    pub fn new(
        manifest_reader: MR,
        manifest_writer: MW,
        bom_repository: BR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            manifest_writer,
            bom_repository,
            progress_reporter,
        }
    }

    /// Executes the check
    ///
    /// Missing manifests are recorded in the response. A missing or
    /// malformed BOM, a malformed manifest, or a failed write aborts.
    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        self.progress_reporter
            .report(&format!("📖 Using BOM {}", request.bom_path.display()));
        let bom = self.bom_repository.read_bom(&request.bom_path)?;

        let allowed_conflicts: Vec<String> =
            request.allow_list.names().map(str::to_string).collect();
        if !allowed_conflicts.is_empty() {
            self.progress_reporter.report(&format!(
                "🔓 Allowed conflicts: {}",
                allowed_conflicts.join(", ")
            ));
        }

        let loaded = load_manifests(
            &self.manifest_reader,
            &self.progress_reporter,
            &request.manifest_paths,
        )?;

        let mut reports = Vec::with_capacity(loaded.found.len());
        let mut checked = Vec::with_capacity(loaded.found.len());

        for (path, located) in loaded.found {
            self.progress_reporter
                .report(&format!("🔍 Linting {}", path.display()));

            let result = BomChecker::check(&bom, located.manifest());
            let written = request.fix && !result.is_clean();
            if written {
                self.manifest_writer
                    .write_manifest(&path, &result.patched_manifest)?;
                self.progress_reporter.report(&format!(
                    "✏️  Updated {} ({} change(s))",
                    path.display(),
                    result.updates.len()
                ));
            }

            // Fix mode judges conflicts on what is now on disk
            let subject = if request.fix {
                LocatedManifest::new(located.id().clone(), result.patched_manifest)
            } else {
                located
            };
            checked.push(subject);

            reports.push(ManifestReport {
                path,
                updates: result.updates,
                written,
            });
        }

        let conflicts = ConflictDetector::detect(&checked, &request.allow_list);

        Ok(CheckResponse {
            bom_path: request.bom_path,
            allowed_conflicts,
            manifests: reports,
            missing: loaded.missing,
            conflicts,
            fix: request.fix,
        })
    }
}
