//! List command for organisations

use colored::Colorize;

use crate::context::SpecContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &SpecContext) -> Result<()> {
    println!("{}", "Organisations".bold());
    println!();

    for org in ctx.spec.iter() {
        let count = org.environments.len();
        let noun = if count == 1 { "environment" } else { "environments" };
        println!(
            "  {:<12} {} ({} {})",
            org.short_name.green(),
            org.name,
            count,
            noun
        );
    }

    println!();
    println!(
        "{} {} organisations. Use {} for details.",
        "Total:".dimmed(),
        ctx.spec.len(),
        "orgspec show <short-name>".cyan()
    );

    Ok(())
}
