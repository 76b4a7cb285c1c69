//! Specification building and resolution
//!
//! Building a specification runs in two phases:
//!
//! 1. **Discovery**: every registered organisation receives the environments
//!    its source lists.
//! 2. **Resolution**: within each environment the environment-level fields
//!    are resolved first, then each component's fields. Every deferred
//!    factory is invoked once and replaced by its value.
//!
//! Resolution skips fields that already hold a value, so running it again
//! over a resolved tree changes nothing.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::Serialize;

use crate::lazy::Lazy;
use crate::model::{Component, Component1, DBConfig, Environment, Organisation};
use crate::registry::SpecRegistry;
use crate::{Error, Result};

/// A fully built set of organisations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Specification {
    pub organisations: Vec<Organisation>,
}

impl Specification {
    /// Get an organisation by short name.
    pub fn get(&self, short_name: &str) -> Option<&Organisation> {
        self.organisations.iter().find(|o| o.short_name == short_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Organisation> {
        self.organisations.iter()
    }

    pub fn len(&self) -> usize {
        self.organisations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisations.is_empty()
    }

    /// Check that no field anywhere in the tree still holds a factory.
    pub fn is_resolved(&self) -> bool {
        self.organisations.iter().all(Organisation::is_resolved)
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, org) in self.organisations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", org)?;
        }
        Ok(())
    }
}

/// Build a resolved specification from a registry.
///
/// Each registered organisation is cloned and its environments replaced by
/// those discovered under its short name. The registry is left untouched.
///
/// # Errors
///
/// Returns [`Error::Factory`] for the first factory that fails; nothing is
/// returned for the organisations built so far.
pub fn build(registry: &SpecRegistry) -> Result<Specification> {
    let mut organisations = Vec::with_capacity(registry.len());

    for registered in registry.organisations() {
        let mut org = registered.clone();
        org.environments = registry.discover_environments(&org.short_name);
        resolve_organisation(&mut org)?;
        organisations.push(org);
    }

    let environments: usize = organisations.iter().map(|o| o.environments.len()).sum();
    tracing::info!(
        organisations = organisations.len(),
        environments,
        "Built specification"
    );

    Ok(Specification { organisations })
}

/// Resolve the environment-level fields of a single environment.
pub fn resolve_environment(env: &mut Environment) -> Result<()> {
    let Some(factory) = env.db_config.as_ref().and_then(|c| c.pending()) else {
        return Ok(());
    };

    let db_config =
        factory(&*env).map_err(|e| Error::factory("db_config", env.name.clone(), e))?;
    tracing::debug!(
        env = %env.name,
        db_user = %db_config.db_user,
        "Resolved environment db_config"
    );
    env.db_config = Some(Lazy::Resolved(db_config));
    Ok(())
}

/// Resolve every environment of an organisation, then their components.
pub fn resolve_organisation(org: &mut Organisation) -> Result<()> {
    for i in 0..org.environments.len() {
        resolve_environment(&mut org.environments[i])?;

        for j in 0..org.environments[i].components.len() {
            let update = match &org.environments[i].components[j] {
                Component::Component1(cmp) => {
                    ComponentUpdate::resolve(cmp, org, &org.environments[i])?
                }
                Component::Component2(_) => continue,
            };
            if let Component::Component1(cmp) = &mut org.environments[i].components[j] {
                update.apply(cmp);
            }
        }
    }
    Ok(())
}

/// Values produced for one component, applied once the borrows of its
/// organisation and environment are released.
struct ComponentUpdate {
    foo: Option<String>,
    db_config: Option<DBConfig>,
}

impl ComponentUpdate {
    fn resolve(cmp: &Component1, org: &Organisation, env: &Environment) -> Result<Self> {
        let target = || format!("{}/{}/{}", org.short_name, env.name, cmp.name);

        let foo = cmp
            .foo
            .as_ref()
            .and_then(|f| f.pending())
            .map(|factory| factory(cmp, org, env))
            .transpose()
            .map_err(|e| Error::factory("foo", target(), e))?;

        let db_config = cmp
            .db_config
            .as_ref()
            .and_then(|c| c.pending())
            .map(|factory| factory(env))
            .transpose()
            .map_err(|e| Error::factory("db_config", target(), e))?;

        if foo.is_some() || db_config.is_some() {
            tracing::debug!(component = %target(), "Resolved component fields");
        }

        Ok(Self { foo, db_config })
    }

    fn apply(self, cmp: &mut Component1) {
        if let Some(foo) = self.foo {
            cmp.foo = Some(Lazy::Resolved(foo));
        }
        if let Some(db_config) = self.db_config {
            cmp.db_config = Some(Lazy::Resolved(db_config));
        }
    }
}

static SPECIFICATION: OnceLock<Specification> = OnceLock::new();
static BUILD_LOCK: Mutex<()> = Mutex::new(());

/// Build the built-in specification once and return it.
///
/// The first successful call builds from [`SpecRegistry::with_builtins`];
/// later calls return the same tree without invoking any factory. Concurrent
/// first callers wait for a single build. A failed build is not cached.
pub fn init_config() -> Result<&'static Specification> {
    init_once(&SPECIFICATION, &BUILD_LOCK, || {
        build(&SpecRegistry::with_builtins())
    })
}

fn init_once<'a>(
    cell: &'a OnceLock<Specification>,
    lock: &Mutex<()>,
    make: impl FnOnce() -> Result<Specification>,
) -> Result<&'a Specification> {
    if let Some(spec) = cell.get() {
        return Ok(spec);
    }
    // A panicking build leaves the cell empty, so a poisoned lock is safe to reuse
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(spec) = cell.get() {
        return Ok(spec);
    }
    let spec = make()?;
    Ok(cell.get_or_init(|| spec))
}
