//! Deferred configuration fields
//!
//! A configuration field either holds its final value or a factory that
//! produces the value once the owning organisation and environment are
//! known. The resolution pass in [`crate::resolve`] swaps every factory for
//! its result.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::Result;
use crate::model::{Component1, Environment, Organisation};

/// Factory evaluated with the owning environment.
pub type EnvFactory<T> = Arc<dyn Fn(&Environment) -> Result<T> + Send + Sync>;

/// Factory evaluated with the component, its organisation and its environment.
pub type ComponentFactory<T> =
    Arc<dyn Fn(&Component1, &Organisation, &Environment) -> Result<T> + Send + Sync>;

/// Field resolved against its environment.
pub type EnvField<T> = Lazy<T, EnvFactory<T>>;

/// Field resolved against its component, organisation and environment.
pub type ComponentField<T> = Lazy<T, ComponentFactory<T>>;

/// A configuration value that is either final or still awaiting context.
#[derive(Clone)]
pub enum Lazy<T, F> {
    /// The final value.
    Resolved(T),
    /// A factory that has not been invoked yet.
    Deferred(F),
}

impl<T, F> Lazy<T, F> {
    /// Wrap an already final value.
    pub fn resolved(value: T) -> Self {
        Self::Resolved(value)
    }

    /// Check if the field holds its final value.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Check if the field still holds a factory.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The final value, or `None` while deferred.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Consume the field, returning the final value if there is one.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }
}

impl<T> Lazy<T, EnvFactory<T>> {
    /// Defer the field until its environment is known.
    pub fn deferred<F>(factory: F) -> Self
    where
        F: Fn(&Environment) -> Result<T> + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(factory))
    }

    /// The factory, if the field has not been resolved yet.
    pub(crate) fn pending(&self) -> Option<EnvFactory<T>> {
        match self {
            Self::Deferred(factory) => Some(Arc::clone(factory)),
            Self::Resolved(_) => None,
        }
    }
}

impl<T> Lazy<T, ComponentFactory<T>> {
    /// Defer the field until its component, organisation and environment are known.
    pub fn deferred<F>(factory: F) -> Self
    where
        F: Fn(&Component1, &Organisation, &Environment) -> Result<T> + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(factory))
    }

    /// The factory, if the field has not been resolved yet.
    pub(crate) fn pending(&self) -> Option<ComponentFactory<T>> {
        match self {
            Self::Deferred(factory) => Some(Arc::clone(factory)),
            Self::Resolved(_) => None,
        }
    }
}

impl<T, F> From<T> for Lazy<T, F> {
    fn from(value: T) -> Self {
        Self::Resolved(value)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(value) => f.debug_tuple("Resolved").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(<factory>)"),
        }
    }
}

impl<T: fmt::Display, F> fmt::Display for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(value) => value.fmt(f),
            Self::Deferred(_) => f.write_str("<deferred>"),
        }
    }
}

// Deferred fields never compare equal, not even to themselves.
impl<T: PartialEq, F> PartialEq for Lazy<T, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Resolved(a), Self::Resolved(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Serialize, F> Serialize for Lazy<T, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Resolved(value) => value.serialize(serializer),
            Self::Deferred(_) => Err(serde::ser::Error::custom(
                "cannot serialize a deferred field before resolution",
            )),
        }
    }
}
