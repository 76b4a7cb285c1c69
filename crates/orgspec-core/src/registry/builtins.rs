//! Built-in organisations

use super::SpecRegistry;
use crate::definitions;
use crate::model::Organisation;

/// Number of built-in organisations.
pub const BUILTIN_COUNT: usize = 2;

/// Returns the built-in organisations, in registration order.
pub fn builtin_organisations() -> Vec<Organisation> {
    vec![
        Organisation::new("Org 1", "org1"),
        Organisation::new("Org 2", "org2"),
    ]
}

pub(super) fn register_builtins(registry: &mut SpecRegistry) {
    for org in builtin_organisations() {
        registry.register_organisation(org);
    }
    registry.register_source("org1", definitions::org1::envspec);
    registry.register_source("org2", definitions::org2::envspec);
}
