//! Layered manifest resolution
//!
//! The `ConfigResolver` loads manifests from a fixed hierarchy of locations
//! and merges them, with later layers overriding earlier ones.

use std::path::PathBuf;

use super::Manifest;
use crate::Result;

/// File name of the global manifest inside the global config directory.
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// File name of the project manifest inside the project root.
pub const PROJECT_CONFIG_FILE: &str = "orgspec.toml";

/// Resolves the effective manifest by merging multiple sources
///
/// Manifests are loaded from:
/// 1. Global config (`<config_dir>/orgspec/config.toml`)
/// 2. Project config (`<root>/orgspec.toml`)
/// 3. An explicit file, when one is given
///
/// Missing global and project files are skipped. A missing explicit file is
/// an error.
pub struct ConfigResolver {
    /// Project root directory
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,

    /// Manifest given on the command line
    explicit: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for the given project root
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/orgspec/`
    /// - macOS: `~/Library/Application Support/orgspec/`
    /// - Windows: `%APPDATA%\orgspec\`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: None,
            explicit: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: impl Into<PathBuf>, global_config_dir: PathBuf) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: Some(global_config_dir),
            explicit: None,
        }
    }

    /// Add an explicit manifest as the last layer (builder pattern).
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("orgspec"))
    }

    /// Resolve the manifest by merging all layers
    ///
    /// # Errors
    ///
    /// Returns an error if any present layer fails to parse, or if the
    /// explicit manifest does not exist.
    pub fn resolve(&self) -> Result<Manifest> {
        let mut manifest = Manifest::empty();

        // Layer 1 - Global config
        if let Some(global_dir) = self.global_config_dir() {
            let global_config_path = global_dir.join(GLOBAL_CONFIG_FILE);
            if global_config_path.is_file() {
                tracing::debug!(?global_config_path, "Loading global config (layer 1)");
                manifest.merge(&Manifest::load(&global_config_path)?);
            } else {
                tracing::debug!(?global_config_path, "No global config found (layer 1), skipping");
            }
        }

        // Layer 2 - Project config
        let project_config_path = self.root.join(PROJECT_CONFIG_FILE);
        if project_config_path.is_file() {
            tracing::debug!(?project_config_path, "Loading project config (layer 2)");
            manifest.merge(&Manifest::load(&project_config_path)?);
        }

        // Layer 3 - Explicit config
        if let Some(explicit_path) = &self.explicit {
            tracing::debug!(?explicit_path, "Loading explicit config (layer 3)");
            manifest.merge(&Manifest::load(explicit_path)?);
        }

        Ok(manifest)
    }
}
