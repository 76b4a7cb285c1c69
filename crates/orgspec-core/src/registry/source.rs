//! Environment sources

use crate::model::Environment;

/// Lists every environment defined for one organisation.
///
/// Each call returns freshly constructed environments, deferred fields
/// included, so repeated builds never share state.
pub trait EnvironmentSource: Send + Sync {
    fn environments(&self) -> Vec<Environment>;
}

impl<F> EnvironmentSource for F
where
    F: Fn() -> Vec<Environment> + Send + Sync,
{
    fn environments(&self) -> Vec<Environment> {
        self()
    }
}
