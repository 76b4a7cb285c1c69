//! Specification context shared by all commands
//!
//! Loads the layered manifest for the working directory and builds the
//! specification the commands read from.

use std::path::Path;

use orgspec_core::{
    ConfigResolver, Error, Organisation, OutputFormat, SpecRegistry, Specification, build,
    init_config,
};

use crate::error::Result;

/// The resolved specification plus output defaults from configuration.
#[derive(Debug)]
pub struct SpecContext {
    pub spec: Specification,
    pub default_format: OutputFormat,
}

impl SpecContext {
    /// Load configuration from `root` and build the specification.
    ///
    /// Without any manifest organisations this is the built-in specification.
    pub fn load(root: &Path, config: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        let mut resolver = match config_dir {
            Some(dir) => ConfigResolver::with_global_config_dir(root, dir.to_path_buf()),
            None => ConfigResolver::new(root),
        };
        if let Some(path) = config {
            resolver = resolver.with_config_file(path);
        }
        let manifest = resolver.resolve()?;

        let spec = if manifest.organisations.is_empty() {
            init_config()?.clone()
        } else {
            tracing::debug!(
                count = manifest.organisations.len(),
                "Applying manifest organisations"
            );
            let mut registry = SpecRegistry::with_builtins();
            registry.apply_manifest(&manifest);
            build(&registry)?
        };

        Ok(Self {
            spec,
            default_format: manifest.output.format.unwrap_or_default(),
        })
    }

    /// The requested output format, falling back to the configured default.
    pub fn format(&self, requested: Option<&str>) -> Result<OutputFormat> {
        match requested {
            Some(format) => Ok(format.parse::<OutputFormat>()?),
            None => Ok(self.default_format),
        }
    }

    /// Get an organisation by short name.
    pub fn organisation(&self, short_name: &str) -> Result<&Organisation> {
        self.spec.get(short_name).ok_or_else(|| {
            Error::OrganisationNotFound {
                short_name: short_name.to_string(),
            }
            .into()
        })
    }
}
