use crate::bom_reconciliation::domain::Manifest;
use crate::ports::outbound::{ManifestWriter, OutputPresenter};
use crate::shared::error::BomlintError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Serializes `value` as 2-space pretty JSON with a trailing newline
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    Ok(content)
}

/// Replaces `path` with `content` atomically
///
/// The content goes to a temporary file in the target directory which is then
/// renamed over the target. Existing symbolic links are never written through.
pub(crate) fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let write_error = |details: String| BomlintError::FileWriteError {
        path: path.to_path_buf(),
        details,
    };

    if super::file_reader::path_exists(path)? {
        validate_not_symlink(path, "write")?;
    }

    let parent = match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.is_dir() {
        return Err(write_error(format!(
            "Parent directory does not exist: {}",
            parent.display()
        ))
        .into());
    }

    let mut temp_file =
        NamedTempFile::new_in(&parent).map_err(|e| write_error(e.to_string()))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| write_error(e.to_string()))?;
    temp_file
        .persist(path)
        .map_err(|e| write_error(e.error.to_string()))?;

    Ok(())
}

/// FileSystemWriter adapter for writing patched manifests back to disk
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for FileSystemWriter {
    fn write_manifest(&self, path: &Path, manifest: &Manifest) -> Result<()> {
        write_atomically(path, &to_pretty_json(manifest)?)
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        if !content.ends_with('\n') {
            stdout
                .write_all(b"\n")
                .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        }
        Ok(())
    }
}
