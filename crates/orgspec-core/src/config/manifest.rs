//! Organisation manifest
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [[organisations]]
//! name = "Org 3"
//! short_name = "org3"
//!
//! [[organisations.environments]]
//! name = "dev"
//! env_type = "DEV"
//! db_user = "ATL_ENTERPRISE_OWNER"
//!
//! [[organisations.environments.components]]
//! name = "Component 1"
//! component_type = "COMPONENT1"
//! foo = true
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::factories::{deferred_db_config, deferred_foo};
use crate::model::{
    Component, Component1, Component2, ComponentType, Environment, EnvironmentType, Organisation,
};
use crate::registry::EnvironmentSource;
use crate::{Error, Result};

/// How specifications are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(Error::InvalidOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format; unset leaves the choice to the caller
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// A component declared in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub name: String,
    pub component_type: ComponentType,
    /// Database owner; the configuration follows the environment
    #[serde(default)]
    pub db_user: Option<String>,
    /// Derive `foo` from the organisation and environment names
    #[serde(default)]
    pub foo: bool,
}

impl ComponentEntry {
    /// Build the component with deferred fields.
    ///
    /// `COMPONENT1` entries and entries with extra configuration become
    /// [`Component1`]; everything else is a [`Component2`] of the declared type.
    pub fn component(&self) -> Component {
        let configured = self.db_user.is_some() || self.foo;
        if self.component_type != ComponentType::Component1 && !configured {
            return Component2::new(&self.name)
                .with_component_type(self.component_type)
                .into();
        }

        let mut component = Component1::new(&self.name).with_component_type(self.component_type);
        if self.foo {
            component = component.with_foo(deferred_foo());
        }
        if let Some(db_user) = &self.db_user {
            component = component.with_db_config(deferred_db_config(db_user.clone()));
        }
        component.into()
    }
}

/// An environment declared in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentEntry {
    pub name: String,
    pub env_type: EnvironmentType,
    /// Database owner; the configuration follows the environment
    #[serde(default)]
    pub db_user: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

impl EnvironmentEntry {
    /// Build the environment with deferred fields.
    pub fn environment(&self) -> Environment {
        let mut env = Environment::new(&self.name, self.env_type);
        if let Some(db_user) = &self.db_user {
            env = env.with_db_config(deferred_db_config(db_user.clone()));
        }
        for entry in &self.components {
            env = env.with_component(entry.component());
        }
        env
    }
}

/// An organisation declared in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganisationEntry {
    pub name: String,
    pub short_name: String,
    /// Environments owned by the organisation. When empty, environments come
    /// from whichever source is already registered for the short name.
    #[serde(default)]
    pub environments: Vec<EnvironmentEntry>,
}

impl OrganisationEntry {
    /// The organisation record, without environments.
    pub fn organisation(&self) -> Organisation {
        Organisation::new(&self.name, &self.short_name)
    }

    /// A source listing the declared environments.
    pub fn source(&self) -> ManifestSource {
        ManifestSource {
            environments: self.environments.clone(),
        }
    }
}

/// Environment source backed by manifest entries.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    environments: Vec<EnvironmentEntry>,
}

impl EnvironmentSource for ManifestSource {
    fn environments(&self) -> Vec<Environment> {
        self.environments
            .iter()
            .map(EnvironmentEntry::environment)
            .collect()
    }
}

/// Parsed `orgspec.toml` manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub organisations: Vec<OrganisationEntry>,
}

impl Manifest {
    /// An empty manifest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a manifest from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a manifest from a file.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if the file does not exist
    /// - [`Error::InvalidConfig`] if the content is not a valid manifest
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Merge another manifest on top of this one.
    ///
    /// Organisations are matched by short name and replaced by the other
    /// manifest's entry; new ones are appended. The output format is
    /// overridden only when the other manifest sets it.
    pub fn merge(&mut self, other: &Manifest) {
        for entry in &other.organisations {
            match self
                .organisations
                .iter_mut()
                .find(|o| o.short_name == entry.short_name)
            {
                Some(existing) => *existing = entry.clone(),
                None => self.organisations.push(entry.clone()),
            }
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Get an organisation entry by short name.
    pub fn organisation(&self, short_name: &str) -> Option<&OrganisationEntry> {
        self.organisations.iter().find(|o| o.short_name == short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[output]
format = "yaml"

[[organisations]]
name = "Org 3"
short_name = "org3"

[[organisations.environments]]
name = "dev"
env_type = "DEV"
db_user = "OWNER"

[[organisations.environments.components]]
name = "api"
component_type = "COMPONENT1"
foo = true

[[organisations.environments.components]]
name = "worker"
component_type = "COMPONENT3"
"#;

    #[test]
    fn test_parse_sample() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        assert_eq!(manifest.output.format, Some(OutputFormat::Yaml));
        assert_eq!(manifest.organisations.len(), 1);

        let org = manifest.organisation("org3").unwrap();
        assert_eq!(org.name, "Org 3");
        assert_eq!(org.environments[0].env_type, EnvironmentType::Dev);
        assert_eq!(org.environments[0].components.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::empty());
    }

    #[test]
    fn test_parse_rejects_unknown_env_type() {
        let content = r#"
[[organisations]]
name = "X"
short_name = "x"

[[organisations.environments]]
name = "qa"
env_type = "QA"
"#;
        assert!(Manifest::parse(content).is_err());
    }

    #[test]
    fn test_source_builds_deferred_environments() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        let envs = manifest.organisations[0].source().environments();

        assert_eq!(envs.len(), 1);
        let env = &envs[0];
        assert!(env.db_config.as_ref().unwrap().is_deferred());
        assert_eq!(env.components[0].component_type(), ComponentType::Component1);
        assert!(!env.components[0].is_resolved());
        assert!(matches!(env.components[1], Component::Component2(_)));
        assert_eq!(env.components[1].component_type(), ComponentType::Component3);
    }

    #[test]
    fn test_merge_replaces_by_short_name() {
        let mut base = Manifest::parse(SAMPLE).unwrap();
        let overlay = Manifest::parse(
            r#"
[[organisations]]
name = "Org Three"
short_name = "org3"

[[organisations]]
name = "Org 4"
short_name = "org4"
"#,
        )
        .unwrap();

        base.merge(&overlay);

        assert_eq!(base.organisations.len(), 2);
        assert_eq!(base.organisations[0].name, "Org Three");
        assert!(base.organisations[0].environments.is_empty());
        assert_eq!(base.organisations[1].short_name, "org4");
        assert_eq!(base.output.format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
