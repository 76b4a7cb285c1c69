//! Declarative organisation specifications
//!
//! Organisations own environments, environments own components. Database
//! credentials and other owner-dependent settings are declared as deferred
//! factories and resolved against their organisation and environment when a
//! specification is built.
//!
//! - **Model**: [`Organisation`], [`Environment`], [`Component`], [`DBConfig`], [`VaultSecret`]
//! - **Deferred fields**: [`Lazy`] holds either a value or a factory
//! - **Registry**: [`SpecRegistry`] maps short names to environment sources
//! - **Resolution**: [`build`] produces a resolved [`Specification`]; [`init_config`]
//!   builds the built-in one once per process
//! - **Configuration**: TOML [`Manifest`]s merged by [`ConfigResolver`]
//!
//! # Example
//!
//! ```
//! use orgspec_core::{SpecRegistry, build};
//!
//! let spec = build(&SpecRegistry::with_builtins()).unwrap();
//! let dev1 = spec.get("org1").and_then(|org| org.env("dev1")).unwrap();
//! assert_eq!(dev1.resolved_db_config().unwrap().db_password.path, "atl/dev1");
//! ```

pub mod config;
pub mod definitions;
pub mod error;
pub mod factories;
pub mod lazy;
pub mod model;
pub mod registry;
pub mod render;
pub mod resolve;

pub use config::{ConfigResolver, Manifest, OutputFormat};
pub use error::{Error, Result};
pub use lazy::{ComponentFactory, ComponentField, EnvFactory, EnvField, Lazy};
pub use model::{
    Component, Component1, Component2, ComponentType, DBConfig, Environment, EnvironmentType,
    Organisation, VaultSecret,
};
pub use registry::{EnvironmentSource, SpecRegistry};
pub use render::render;
pub use resolve::{Specification, build, init_config, resolve_environment, resolve_organisation};
