//! Shared factory helpers for deferred fields
//!
//! Environment sources describe their configuration in terms of these
//! helpers so that the values follow the owning environment.

use crate::lazy::{ComponentField, EnvField};
use crate::model::{Component1, DBConfig, Environment, Organisation, VaultSecret};

/// Database owner used by the built-in environments.
pub const DEFAULT_DB_USER: &str = "ATL_ENTERPRISE_OWNER";

/// Vault key holding the database password.
pub const DB_PASSWORD_KEY: &str = "ATL_DB_PASSWORD";

/// Prefix of every environment's Vault path.
pub const VAULT_PATH_PREFIX: &str = "atl";

/// Generate a database configuration adjusted for the target environment.
///
/// The password lives at `atl/<env>` under the `ATL_DB_PASSWORD` key. The
/// namespace is left unset until secrets become namespace aware.
pub fn env_based_db_config(env: &Environment, db_user: &str) -> DBConfig {
    DBConfig::new(
        db_user,
        VaultSecret::new(
            format!("{}/{}", VAULT_PATH_PREFIX, env.name),
            [DB_PASSWORD_KEY],
        ),
    )
}

/// `<organisation name>/<environment name>`.
pub fn env_based_foo_config(org: &Organisation, env: &Environment, _cmp: &Component1) -> String {
    format!("{}/{}", org.name, env.name)
}

/// A deferred database configuration built with [`env_based_db_config`].
pub fn deferred_db_config(db_user: impl Into<String>) -> EnvField<DBConfig> {
    let db_user = db_user.into();
    EnvField::deferred(move |env| Ok(env_based_db_config(env, &db_user)))
}

/// A deferred `foo` value built with [`env_based_foo_config`].
pub fn deferred_foo() -> ComponentField<String> {
    ComponentField::deferred(|cmp, org, env| Ok(env_based_foo_config(org, env, cmp)))
}
