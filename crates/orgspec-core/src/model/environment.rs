//! Environment specifications

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::component::write_optional;
use super::{Component, DBConfig};
use crate::error::Error;
use crate::lazy::EnvField;

/// Environment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvironmentType {
    #[serde(alias = "dev")]
    Dev,
    #[serde(alias = "tst")]
    Tst,
    #[serde(alias = "stg")]
    Stg,
    #[serde(alias = "prd")]
    Prd,
}

impl EnvironmentType {
    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, EnvironmentType::Prd)
    }
}

impl FromStr for EnvironmentType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEV" => Ok(EnvironmentType::Dev),
            "TST" => Ok(EnvironmentType::Tst),
            "STG" => Ok(EnvironmentType::Stg),
            "PRD" => Ok(EnvironmentType::Prd),
            _ => Err(Error::InvalidEnvironmentType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentType::Dev => write!(f, "DEV"),
            EnvironmentType::Tst => write!(f, "TST"),
            EnvironmentType::Stg => write!(f, "STG"),
            EnvironmentType::Prd => write!(f, "PRD"),
        }
    }
}

/// Specification for a single environment, owned by a single organisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Environment {
    /// Environment name.
    ///
    /// Lowercase by convention, since the name is used to build the Vault
    /// path for the environment's secrets.
    pub name: String,

    /// Whether this is a non-prod or production environment.
    pub env_type: EnvironmentType,

    /// Database configuration used to connect to the application backend.
    pub db_config: Option<EnvField<DBConfig>>,

    /// Components running in the environment.
    pub components: Vec<Component>,
}

impl Environment {
    /// Create an environment with no database configuration or components.
    pub fn new(name: impl Into<String>, env_type: EnvironmentType) -> Self {
        Self {
            name: name.into(),
            env_type,
            db_config: None,
            components: Vec::new(),
        }
    }

    pub fn with_db_config(mut self, db_config: EnvField<DBConfig>) -> Self {
        self.db_config = Some(db_config);
        self
    }

    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// The resolved database configuration, if any.
    pub fn resolved_db_config(&self) -> Option<&DBConfig> {
        self.db_config.as_ref().and_then(|c| c.value())
    }

    /// Check that neither the environment nor its components hold factories.
    pub fn is_resolved(&self) -> bool {
        self.db_config.as_ref().is_none_or(|c| c.is_resolved())
            && self.components.iter().all(Component::is_resolved)
    }

    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(f, "{}{} [{}]", pad, self.name, self.env_type)?;
        write_optional(f, indent + 2, "db_config", self.db_config.as_ref())?;
        if self.components.is_empty() {
            writeln!(f, "{}  components: <none>", pad)
        } else {
            writeln!(f, "{}  components:", pad)?;
            for component in &self.components {
                component.write_tree(f, indent + 4)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
