//! Env command for a single environment

use colored::Colorize;
use orgspec_core::{Error, OutputFormat, render};

use crate::context::SpecContext;
use crate::error::Result;

/// Run the env command
pub fn run_env(
    ctx: &SpecContext,
    short_name: &str,
    name: &str,
    format: Option<&str>,
) -> Result<()> {
    let format = ctx.format(format)?;
    let org = ctx.organisation(short_name)?;
    let env = org.env(name).ok_or_else(|| Error::EnvironmentNotFound {
        organisation: short_name.to_string(),
        name: name.to_string(),
    })?;

    match format {
        OutputFormat::Text => {
            println!("{}", format!("{} / {}", org.name, env.name).bold());
            print!("{}", env);
        }
        _ => print!("{}", render(env, format)?),
    }

    Ok(())
}
