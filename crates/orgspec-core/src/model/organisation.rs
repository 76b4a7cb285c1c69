//! Organisation specifications

use std::fmt;

use serde::Serialize;

use super::Environment;

/// Organisation specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organisation {
    /// Friendly name
    pub name: String,

    /// Abbreviated name.
    ///
    /// Case sensitive. Selects the environment source for the organisation
    /// and is embedded into downstream application configuration.
    pub short_name: String,

    /// Environments hosted by the organisation
    pub environments: Vec<Environment>,
}

impl Organisation {
    /// Create an organisation with no environments.
    ///
    /// Environments are filled in from the registry when a specification is
    /// built.
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            environments: Vec::new(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environments.push(environment);
        self
    }

    /// Retrieve an environment by name.
    ///
    /// Returns the first environment with a matching name, or `None`.
    pub fn env(&self, name: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.name == name)
    }

    /// Names of all environments, in discovery order.
    pub fn env_names(&self) -> Vec<&str> {
        self.environments.iter().map(|e| e.name.as_str()).collect()
    }

    /// Check that every environment has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.environments.iter().all(Environment::is_resolved)
    }
}

impl fmt::Display for Organisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.short_name)?;
        if self.environments.is_empty() {
            return writeln!(f, "  environments: <none>");
        }
        for env in &self.environments {
            env.write_tree(f, 2)?;
        }
        Ok(())
    }
}
