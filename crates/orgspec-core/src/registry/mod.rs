//! Explicit registry of organisations and their environment sources
//!
//! Organisations are registered by short name. Each short name may have an
//! [`EnvironmentSource`] that lists the environments the organisation owns.

mod builtins;
mod source;
mod store;

pub use builtins::{BUILTIN_COUNT, builtin_organisations};
pub use source::EnvironmentSource;
pub use store::SpecRegistry;
