use crate::bom_reconciliation::domain::{BomUpdate, Conflict};
use crate::shared::error::ExitCode;
use std::path::PathBuf;

/// Check outcome of a single manifest
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestReport {
    pub path: PathBuf,
    pub updates: Vec<BomUpdate>,
    /// Whether the patched manifest was written back (fix mode only)
    pub written: bool,
}

impl ManifestReport {
    pub fn is_clean(&self) -> bool {
        self.updates.is_empty()
    }

    /// Mismatches left in the file after this run
    pub fn has_pending_updates(&self) -> bool {
        !self.updates.is_empty() && !self.written
    }
}

/// CheckResponse - response DTO from the check / fix use case
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResponse {
    pub bom_path: PathBuf,
    /// Allow-listed dependency names, sorted
    pub allowed_conflicts: Vec<String>,
    /// One report per manifest that was found, in request order
    pub manifests: Vec<ManifestReport>,
    /// Requested manifests that do not exist
    pub missing: Vec<PathBuf>,
    pub conflicts: Vec<Conflict>,
    pub fix: bool,
}

impl CheckResponse {
    /// Status policy: success only when nothing is missing, every mismatch
    /// was written back, and no conflicts remain
    pub fn exit_code(&self) -> ExitCode {
        let pending = self.manifests.iter().any(ManifestReport::has_pending_updates);
        if !self.missing.is_empty() || pending || !self.conflicts.is_empty() {
            ExitCode::IssuesFound
        } else {
            ExitCode::Success
        }
    }

    pub fn update_count(&self) -> usize {
        self.manifests.iter().map(|report| report.updates.len()).sum()
    }
}

/// MergeResponse - response DTO from the merge use case
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResponse {
    pub bom_path: PathBuf,
    /// Pre-existing entries folded with observed versions
    pub merged: usize,
    /// Entries inserted for dependencies the BOM did not know
    pub added: usize,
    /// Whether the BOM file was rewritten
    pub written: bool,
    pub missing: Vec<PathBuf>,
}

impl MergeResponse {
    pub fn exit_code(&self) -> ExitCode {
        if self.missing.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::IssuesFound
        }
    }
}

/// PruneResponse - response DTO from the prune use case
#[derive(Debug, Clone, PartialEq)]
pub struct PruneResponse {
    pub bom_path: PathBuf,
    /// Names of the dropped entries, in BOM order
    pub pruned: Vec<String>,
    pub written: bool,
    pub missing: Vec<PathBuf>,
    /// Pruning was not attempted because manifests were missing
    pub skipped: bool,
}

impl PruneResponse {
    pub fn count(&self) -> usize {
        self.pruned.len()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.missing.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::IssuesFound
        }
    }
}
