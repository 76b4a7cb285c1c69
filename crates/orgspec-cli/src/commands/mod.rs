//! Command implementations for orgspec-cli

pub mod env;
pub mod list;
pub mod show;

pub use env::run_env;
pub use list::run_list;
pub use show::run_show;
