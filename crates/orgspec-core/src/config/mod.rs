//! Configuration loading
//!
//! Organisations can be declared in TOML manifests in addition to the
//! built-in definitions. Manifests are merged from several layers by the
//! [`ConfigResolver`].

mod manifest;
mod resolver;

pub use manifest::{
    ComponentEntry, EnvironmentEntry, Manifest, ManifestSource, OrganisationEntry, OutputConfig,
    OutputFormat,
};
pub use resolver::{ConfigResolver, GLOBAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
