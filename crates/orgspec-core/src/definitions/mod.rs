//! Built-in environment definitions
//!
//! One module per organisation, named after its short name. Each exposes an
//! `envspec()` listing registered as that organisation's environment source.

pub mod org1;
pub mod org2;
