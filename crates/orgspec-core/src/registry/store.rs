//! Organisation registry storage

use std::collections::HashMap;

use super::EnvironmentSource;
use super::builtins::register_builtins;
use crate::config::Manifest;
use crate::model::{Environment, Organisation};

/// Central registry for organisation definitions.
///
/// Organisations keep their registration order, which is the order a built
/// specification lists them in. Environment sources are keyed by the
/// organisation's short name.
pub struct SpecRegistry {
    organisations: Vec<Organisation>,
    sources: HashMap<String, Box<dyn EnvironmentSource>>,
}

impl SpecRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            organisations: Vec::new(),
            sources: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in organisations.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Register an organisation.
    ///
    /// An organisation with the same short name is replaced in place, keeping
    /// its original position.
    pub fn register_organisation(&mut self, org: Organisation) {
        match self
            .organisations
            .iter_mut()
            .find(|o| o.short_name == org.short_name)
        {
            Some(existing) => {
                tracing::warn!(short_name = %org.short_name, "Replacing registered organisation");
                *existing = org;
            }
            None => {
                tracing::debug!(short_name = %org.short_name, name = %org.name, "Registered organisation");
                self.organisations.push(org);
            }
        }
    }

    /// Register the environment source for a short name, replacing any
    /// previous source.
    pub fn register_source(
        &mut self,
        short_name: impl Into<String>,
        source: impl EnvironmentSource + 'static,
    ) {
        let short_name = short_name.into();
        if self.sources.contains_key(&short_name) {
            tracing::warn!(%short_name, "Replacing environment source");
        }
        self.sources.insert(short_name, Box::new(source));
    }

    /// Register every organisation from a configuration manifest.
    ///
    /// Organisations that declare environments also get a source for them.
    pub fn apply_manifest(&mut self, manifest: &Manifest) {
        for entry in &manifest.organisations {
            self.register_organisation(entry.organisation());
            if !entry.environments.is_empty() {
                self.register_source(entry.short_name.clone(), entry.source());
            }
        }
    }

    /// All registered organisations, in registration order.
    pub fn organisations(&self) -> &[Organisation] {
        &self.organisations
    }

    /// Get an organisation by short name.
    pub fn organisation(&self, short_name: &str) -> Option<&Organisation> {
        self.organisations.iter().find(|o| o.short_name == short_name)
    }

    /// Short names of all registered organisations, in registration order.
    pub fn short_names(&self) -> Vec<&str> {
        self.organisations
            .iter()
            .map(|o| o.short_name.as_str())
            .collect()
    }

    /// Check if an environment source is registered for a short name.
    pub fn has_source(&self, short_name: &str) -> bool {
        self.sources.contains_key(short_name)
    }

    /// List the environments defined for a short name.
    ///
    /// Returns an empty list when no source is registered.
    pub fn discover_environments(&self, short_name: &str) -> Vec<Environment> {
        match self.sources.get(short_name) {
            Some(source) => {
                let envs = source.environments();
                tracing::debug!(%short_name, count = envs.len(), "Discovered environments");
                envs
            }
            None => {
                tracing::debug!(%short_name, "No environment source registered");
                Vec::new()
            }
        }
    }

    /// Get the number of registered organisations.
    pub fn len(&self) -> usize {
        self.organisations.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.organisations.is_empty()
    }
}

impl Default for SpecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
