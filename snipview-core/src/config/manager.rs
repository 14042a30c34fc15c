//! Manifest loader for TOML file operations
//!
//! This module provides the `ManifestLoader` which handles loading, saving and
//! validating snippet manifest files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::manifest::{SnippetEntry, SnippetManifest};
use crate::error::{ConfigError, ConfigResult};

/// File name of the default manifest
const MANIFEST_FILE: &str = "snippets.toml";

/// Manifest loader for `SnipView`
///
/// Manifests are stored in `~/.config/snipview/` by default, but any path can
/// be loaded directly.
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    /// Base directory for the default manifest
    config_dir: PathBuf,
}

impl ManifestLoader {
    /// Creates a new `ManifestLoader` with the default configuration directory
    ///
    /// The default directory is `~/.config/snipview/`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound(PathBuf::from("~/.config")))?
            .join("snipview");
        Ok(Self { config_dir })
    }

    /// Creates a new `ManifestLoader` with a custom configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory path
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path of the default manifest
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.config_dir.join(MANIFEST_FILE)
    }

    /// Loads the default manifest
    ///
    /// Returns an empty manifest if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_default(&self) -> ConfigResult<SnippetManifest> {
        Self::load(&self.manifest_path())
    }

    /// Saves the default manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_default(&self, manifest: &SnippetManifest) -> ConfigResult<()> {
        Self::save(&self.manifest_path(), manifest)
    }

    /// Loads a manifest from `path`
    ///
    /// Returns an empty manifest if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> ConfigResult<SnippetManifest> {
        if !path.exists() {
            debug!("Manifest not found, using empty manifest");
            return Ok(SnippetManifest::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read {}: {}", path.display(), e)))?;

        let manifest: SnippetManifest = toml::from_str(&content).map_err(|e| {
            ConfigError::Deserialize(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            snippets = manifest.snippets.len(),
            templates = manifest.templates.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Parses manifest content held in memory
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid manifest.
    pub fn parse(content: &str) -> ConfigResult<SnippetManifest> {
        toml::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Saves a manifest to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be serialized or written.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn save(path: &Path, manifest: &SnippetManifest) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(manifest)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize: {e}")))?;

        fs::write(path, content)
            .map_err(|e| ConfigError::Write(format!("Failed to write {}: {}", path.display(), e)))
    }

    // ========== Validation ==========

    /// Validates a single snippet entry
    ///
    /// # Errors
    ///
    /// Returns an error if the name or template is empty.
    pub fn validate_entry(entry: &SnippetEntry) -> ConfigResult<()> {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "name".to_string(),
                reason: "Snippet name cannot be empty".to_string(),
            });
        }

        if entry.template.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "template".to_string(),
                reason: format!("Snippet '{}' has an empty template", entry.name),
            });
        }

        Ok(())
    }

    /// Validates all entries of a manifest and returns errors for invalid ones
    ///
    /// Besides per-entry checks, reports names defined more than once and
    /// templates missing from the `[templates]` table.
    #[must_use]
    pub fn validate_manifest(manifest: &SnippetManifest) -> Vec<(usize, ConfigError)> {
        let mut errors = Vec::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();

        for (i, entry) in manifest.snippets.iter().enumerate() {
            if let Err(e) = Self::validate_entry(entry) {
                errors.push((i, e));
                continue;
            }

            if let Some(first) = first_seen.get(entry.name.as_str()) {
                errors.push((
                    i,
                    ConfigError::Validation {
                        field: "name".to_string(),
                        reason: format!(
                            "Snippet '{}' is already defined by entry {}",
                            entry.name, first
                        ),
                    },
                ));
            } else {
                first_seen.insert(entry.name.as_str(), i);
            }

            if !manifest.templates.contains_key(&entry.template) {
                errors.push((
                    i,
                    ConfigError::Validation {
                        field: "template".to_string(),
                        reason: format!(
                            "Template '{}' of snippet '{}' is not defined",
                            entry.template, entry.name
                        ),
                    },
                ));
            }
        }

        errors
    }
}
