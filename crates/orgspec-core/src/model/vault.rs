//! Secret descriptors and database configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a secret in Vault's KV backend.
///
/// This only describes where the secret lives; nothing here reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSecret {
    /// Path to the secret
    pub path: String,
    /// One or more keys appended to the path
    pub keys: Vec<String>,
    /// Vault namespace
    #[serde(default)]
    pub namespace: Option<String>,
}

impl VaultSecret {
    /// Create a descriptor without a namespace.
    pub fn new<I, S>(path: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            keys: keys.into_iter().map(Into::into).collect(),
            namespace: None,
        }
    }

    /// Set the namespace (builder pattern).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl fmt::Display for VaultSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vault:")?;
        if let Some(ns) = &self.namespace {
            write!(f, "{}/", ns)?;
        }
        write!(f, "{}#{}", self.path, self.keys.join(","))
    }
}

/// Database credentials for an environment or component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DBConfig {
    /// Username used to access the database
    pub db_user: String,
    /// Where the database password is kept
    pub db_password: VaultSecret,
}

impl DBConfig {
    pub fn new(db_user: impl Into<String>, db_password: VaultSecret) -> Self {
        Self {
            db_user: db_user.into(),
            db_password,
        }
    }
}

impl fmt::Display for DBConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (password: {})", self.db_user, self.db_password)
    }
}
