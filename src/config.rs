//! Configuration file support for bomlint.
//!
//! Provides YAML-based configuration through `bomlint.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bomlint.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// BOM location; relative paths are resolved against the config file's directory.
    pub bom: Option<PathBuf>,
    pub allow_conflicts: Option<Vec<String>>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    resolve_bom_path(&mut config, path);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref names) = config.allow_conflicts {
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: allow_conflicts[{}] must not be empty.\n\n\
                     💡 Hint: Each allow_conflicts entry must be a dependency name (e.g., \"typescript\").",
                    i
                );
            }
        }
    }

    if let Some(ref bom) = config.bom {
        if bom.as_os_str().is_empty() {
            bail!(
                "Invalid config: bom must not be empty.\n\n\
                 💡 Hint: Set 'bom' to the path of your BOM file (e.g., \".bomlint.json\") or remove the key."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

fn resolve_bom_path(config: &mut ConfigFile, config_path: &Path) {
    let base = match config_path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => return,
    };
    if let Some(bom) = config.bom.as_mut() {
        if bom.is_relative() {
            *bom = base.join(&*bom);
        }
    }
}
