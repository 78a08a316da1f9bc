use crate::bom_reconciliation::domain::LocatedManifest;
use crate::ports::outbound::{ManifestReader, ProgressReporter};
use crate::shared::Result;
use std::path::PathBuf;

/// Manifests found on disk, paired with the path they came from
pub(crate) struct LoadedManifests {
    pub found: Vec<(PathBuf, LocatedManifest)>,
    pub missing: Vec<PathBuf>,
}

impl LoadedManifests {
    pub fn located(&self) -> Vec<LocatedManifest> {
        self.found.iter().map(|(_, located)| located.clone()).collect()
    }
}

/// Reads every requested manifest in order
///
/// Missing files are reported and collected; unreadable or malformed files
/// abort the load.
pub(crate) fn load_manifests<MR, PR>(
    reader: &MR,
    progress_reporter: &PR,
    paths: &[PathBuf],
) -> Result<LoadedManifests>
where
    MR: ManifestReader,
    PR: ProgressReporter,
{
    let total = paths.len();
    let mut found = Vec::with_capacity(total);
    let mut missing = Vec::new();

    for (idx, path) in paths.iter().enumerate() {
        let label = path.display().to_string();
        progress_reporter.report_progress(idx + 1, total, Some(&label));

        match reader.read_manifest(path)? {
            Some(manifest) => {
                found.push((path.clone(), LocatedManifest::new(path.as_path(), manifest)));
            }
            None => {
                progress_reporter.report_error(&format!("❌ No package file {}", label));
                missing.push(path.clone());
            }
        }
    }

    Ok(LoadedManifests { found, missing })
}
