//! Show command for organisation specifications

use colored::Colorize;
use orgspec_core::{Organisation, OutputFormat, render};

use crate::context::SpecContext;
use crate::error::Result;

const RULE_WIDTH: usize = 80;

/// Run the show command
///
/// Prints one organisation when `short_name` is given, otherwise all of them.
pub fn run_show(ctx: &SpecContext, short_name: Option<&str>, format: Option<&str>) -> Result<()> {
    let format = ctx.format(format)?;

    match short_name {
        Some(short_name) => {
            let org = ctx.organisation(short_name)?;
            match format {
                OutputFormat::Text => print_text(position(ctx, short_name), org),
                _ => print!("{}", render(org, format)?),
            }
        }
        None => match format {
            OutputFormat::Text => {
                for (i, org) in ctx.spec.iter().enumerate() {
                    if i > 0 {
                        println!("\n");
                    }
                    print_text(i + 1, org);
                }
            }
            _ => print!("{}", render(&ctx.spec, format)?),
        },
    }

    Ok(())
}

/// 1-based position of an organisation in the specification.
fn position(ctx: &SpecContext, short_name: &str) -> usize {
    ctx.spec
        .iter()
        .position(|org| org.short_name == short_name)
        .map_or(1, |i| i + 1)
}

fn print_text(index: usize, org: &Organisation) {
    let rule = "-".repeat(RULE_WIDTH);
    println!("{}", rule.dimmed());
    println!("{}", format!("Organisation {} Specification", index).bold());
    println!("{}", rule.dimmed());
    print!("{}", org);
}
