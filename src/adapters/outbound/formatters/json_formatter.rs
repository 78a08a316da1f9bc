use crate::application::dto::{CheckResponse, MergeResponse, PruneResponse};
use crate::bom_reconciliation::domain::{BomUpdate, Conflict, UpdateTarget};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    bom: String,
    fix: bool,
    #[serde(rename = "allowedConflicts")]
    allowed_conflicts: &'a [String],
    manifests: Vec<ManifestEntry<'a>>,
    missing: Vec<String>,
    conflicts: Vec<ConflictEntry<'a>>,
    #[serde(rename = "exitCode")]
    exit_code: i32,
}

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    path: String,
    written: bool,
    updates: Vec<UpdateEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct UpdateEntry<'a> {
    dependency: &'a str,
    field: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<&'a str>,
    approved: &'a str,
}

#[derive(Debug, Serialize)]
struct ConflictEntry<'a> {
    dependency: &'a str,
    conflicts: Vec<ConflictSide<'a>>,
}

#[derive(Debug, Serialize)]
struct ConflictSide<'a> {
    manifest: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct MergeReport {
    bom: String,
    merged: usize,
    added: usize,
    written: bool,
    missing: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PruneReport<'a> {
    bom: String,
    pruned: &'a [String],
    count: usize,
    written: bool,
    skipped: bool,
    missing: Vec<String>,
}

fn display_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.as_ref().display().to_string())
        .collect()
}

impl<'a> From<&'a BomUpdate> for UpdateEntry<'a> {
    fn from(update: &'a BomUpdate) -> Self {
        let field = match update.target {
            UpdateTarget::Dependency(kind) => kind.field_name(),
            UpdateTarget::SelfVersion => "version",
        };
        Self {
            dependency: &update.dependency,
            field,
            current: update.current.as_deref(),
            approved: &update.approved,
        }
    }
}

impl<'a> From<&'a Conflict> for ConflictEntry<'a> {
    fn from(conflict: &'a Conflict) -> Self {
        Self {
            dependency: &conflict.dependency,
            conflicts: conflict
                .conflicts
                .iter()
                .map(|side| ConflictSide {
                    manifest: side.manifest.as_str(),
                    version: &side.version,
                })
                .collect(),
        }
    }
}

/// JsonFormatter adapter rendering machine-readable reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(report: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_check(&self, response: &CheckResponse) -> Result<String> {
        let report = CheckReport {
            bom: response.bom_path.display().to_string(),
            fix: response.fix,
            allowed_conflicts: &response.allowed_conflicts,
            manifests: response
                .manifests
                .iter()
                .map(|manifest| ManifestEntry {
                    path: manifest.path.display().to_string(),
                    written: manifest.written,
                    updates: manifest.updates.iter().map(UpdateEntry::from).collect(),
                })
                .collect(),
            missing: display_paths(&response.missing),
            conflicts: response.conflicts.iter().map(ConflictEntry::from).collect(),
            exit_code: response.exit_code().as_i32(),
        };
        Self::to_json(&report)
    }

    fn format_merge(&self, response: &MergeResponse) -> Result<String> {
        Self::to_json(&MergeReport {
            bom: response.bom_path.display().to_string(),
            merged: response.merged,
            added: response.added,
            written: response.written,
            missing: display_paths(&response.missing),
        })
    }

    fn format_prune(&self, response: &PruneResponse) -> Result<String> {
        Self::to_json(&PruneReport {
            bom: response.bom_path.display().to_string(),
            pruned: &response.pruned,
            count: response.count(),
            written: response.written,
            skipped: response.skipped,
            missing: display_paths(&response.missing),
        })
    }
}
