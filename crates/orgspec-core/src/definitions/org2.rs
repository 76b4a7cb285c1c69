//! Environments owned by `org2`

use crate::factories::{DEFAULT_DB_USER, deferred_db_config};
use crate::model::{Environment, EnvironmentType};

fn environment(name: &str, env_type: EnvironmentType) -> Environment {
    Environment::new(name, env_type).with_db_config(deferred_db_config(DEFAULT_DB_USER))
}

/// List all environments defined for `org2`.
pub fn envspec() -> Vec<Environment> {
    vec![
        environment("dev", EnvironmentType::Dev),
        environment("tst", EnvironmentType::Tst),
        environment("stg", EnvironmentType::Stg),
        environment("prd", EnvironmentType::Prd),
    ]
}
