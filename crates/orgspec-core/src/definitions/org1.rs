//! Environments owned by `org1`

use crate::factories::{DEFAULT_DB_USER, deferred_db_config, deferred_foo};
use crate::model::{Component1, Component2, Environment, EnvironmentType};

/// Dev environment.
pub fn dev() -> Environment {
    Environment::new("dev", EnvironmentType::Dev)
        .with_component(
            Component1::new("Component 1").with_db_config(deferred_db_config(DEFAULT_DB_USER)),
        )
        .with_component(Component2::new("Component 2"))
}

/// Second dev environment, with environment-level database configuration.
pub fn dev1() -> Environment {
    Environment::new("dev1", EnvironmentType::Dev)
        .with_db_config(deferred_db_config(DEFAULT_DB_USER))
        .with_component(
            Component1::new("Component 1")
                .with_foo(deferred_foo())
                .with_db_config(deferred_db_config(DEFAULT_DB_USER)),
        )
        .with_component(Component2::new("Component 2"))
        .with_component(Component2::new("Another Componnent #2"))
}

/// List all environments defined for `org1`.
pub fn envspec() -> Vec<Environment> {
    vec![dev(), dev1()]
}
