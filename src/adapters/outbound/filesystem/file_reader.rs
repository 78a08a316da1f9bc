use crate::bom_reconciliation::domain::Manifest;
use crate::ports::outbound::ManifestReader;
use crate::shared::error::BomlintError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// FileSystemReader adapter for reading package manifests from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether anything (file, directory or link) exists at `path`
pub(crate) fn path_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BomlintError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()),
    }
}

/// Safely read a file with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
pub(crate) fn safe_read_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    fs::read_to_string(path).map_err(|e| {
        BomlintError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<Option<Manifest>> {
        if !path_exists(path)? {
            return Ok(None);
        }

        let content = safe_read_file(path, "package file")?;
        let manifest = serde_json::from_str(&content).map_err(|e| BomlintError::ManifestParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(Some(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_reconciliation::domain::DependencyKind;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(
            &path,
            r#"{"name": "app", "version": "1.0.0", "dependencies": {"foo": "^1.2.0"}}"#,
        )
        .unwrap();

        let manifest = FileSystemReader::new().read_manifest(&path).unwrap().unwrap();

        assert_eq!(manifest.name(), Some("app"));
        assert_eq!(manifest.version(), Some("1.0.0"));
        assert_eq!(
            manifest.declared_version(DependencyKind::Regular, "foo"),
            Some("^1.2.0")
        );
    }

    #[test]
    fn test_read_manifest_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");

        let result = FileSystemReader::new().read_manifest(&path).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_read_manifest_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileSystemReader::new().read_manifest(&path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse manifest"));
    }

    #[test]
    fn test_read_manifest_wrong_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, r#"{"dependencies": ["foo"]}"#).unwrap();

        assert!(FileSystemReader::new().read_manifest(&path).is_err());
    }

    #[test]
    fn test_read_manifest_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().read_manifest(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_manifest_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, "{}").unwrap();
        let link = temp_dir.path().join("package.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_manifest(&link);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Security violation"));
    }
}
