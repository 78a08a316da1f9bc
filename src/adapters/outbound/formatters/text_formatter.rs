use crate::application::dto::{CheckResponse, ManifestReport, MergeResponse, PruneResponse};
use crate::bom_reconciliation::domain::BomUpdate;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::{self, Write};
use std::path::PathBuf;

/// Placeholder shown for a manifest without a `version` field
const NO_VERSION: &str = "(none)";

/// TextFormatter adapter rendering human-readable reports
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_update(output: &mut String, update: &BomUpdate) -> fmt::Result {
        writeln!(
            output,
            "  {}: {} -> {}",
            update,
            update.current.as_deref().unwrap_or(NO_VERSION),
            update.approved
        )
    }

    fn write_manifest(output: &mut String, report: &ManifestReport, fix: bool) -> fmt::Result {
        if report.is_clean() {
            return writeln!(output, "✅ {}: OK", report.path.display());
        }

        let status = if report.written {
            "fixed"
        } else if fix {
            "not written"
        } else {
            "need fixing"
        };
        writeln!(
            output,
            "❌ {}: {} dependencies {}",
            report.path.display(),
            report.updates.len(),
            status
        )?;
        for update in &report.updates {
            Self::write_update(output, update)?;
        }
        Ok(())
    }

    fn write_missing(output: &mut String, missing: &[PathBuf]) -> fmt::Result {
        for path in missing {
            writeln!(output, "❌ No package file {}", path.display())?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format_check(&self, response: &CheckResponse) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "BOM: {}", response.bom_path.display())?;
        if !response.allowed_conflicts.is_empty() {
            writeln!(
                output,
                "Allowed conflicts: {}",
                response.allowed_conflicts.join(", ")
            )?;
        }
        writeln!(output)?;

        for report in &response.manifests {
            Self::write_manifest(&mut output, report, response.fix)?;
        }
        Self::write_missing(&mut output, &response.missing)?;

        if !response.conflicts.is_empty() {
            writeln!(output)?;
            writeln!(output, "⚠️  Dependency conflicts:")?;
            for conflict in &response.conflicts {
                writeln!(output, "  {}", conflict)?;
            }
        }

        if response.update_count() > 0 && !response.fix {
            writeln!(output)?;
            writeln!(output, "💡 Run `bomlint fix` to apply the BOM versions")?;
        }

        Ok(output)
    }

    fn format_merge(&self, response: &MergeResponse) -> Result<String> {
        let mut output = String::new();
        Self::write_missing(&mut output, &response.missing)?;
        let outcome = if response.written {
            "updated"
        } else {
            "unchanged"
        };
        writeln!(
            output,
            "Merged {} and added {} dependencies: {} {}",
            response.merged,
            response.added,
            response.bom_path.display(),
            outcome
        )?;
        Ok(output)
    }

    fn format_prune(&self, response: &PruneResponse) -> Result<String> {
        let mut output = String::new();
        Self::write_missing(&mut output, &response.missing)?;
        if response.skipped {
            writeln!(
                output,
                "Prune skipped: {} unchanged",
                response.bom_path.display()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "Pruned {} dependencies from {}",
            response.count(),
            response.bom_path.display()
        )?;
        for name in &response.pruned {
            writeln!(output, "  - {}", name)?;
        }
        Ok(output)
    }
}
