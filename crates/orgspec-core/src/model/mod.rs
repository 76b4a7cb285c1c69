//! Specification records
//!
//! Organisations own environments, environments own components. Fields that
//! depend on their owners are [`Lazy`](crate::lazy::Lazy) until the
//! resolution pass has run.

mod component;
mod environment;
mod organisation;
mod vault;

pub use component::{Component, Component1, Component2, ComponentType};
pub use environment::{Environment, EnvironmentType};
pub use organisation::Organisation;
pub use vault::{DBConfig, VaultSecret};
