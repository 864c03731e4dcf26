//! Show command: details for a single tool

use colored::Colorize;
use serde::Serialize;
use toolkit_registry::{Catalog, Tool};

use super::print_json;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};

#[derive(Debug, Serialize)]
pub struct ToolDetails<'a> {
    #[serde(flatten)]
    pub tool: &'a Tool,
    pub category_name: Option<&'a str>,
}

/// Resolve a tool by id, or by path when the argument starts with '/'.
pub fn resolve<'a>(catalog: &'a Catalog, arg: &str) -> Option<&'a Tool> {
    if arg.starts_with('/') {
        catalog.tool_by_path(arg)
    } else {
        catalog.tool_by_id(arg)
    }
}

/// Run the show command
pub fn run_show(catalog: &Catalog, arg: &str, format: OutputFormat) -> Result<()> {
    let tool = resolve(catalog, arg)
        .ok_or_else(|| CliError::user(format!("No tool found for '{arg}'")))?;
    let category = catalog.category_of(tool);

    if format == OutputFormat::Json {
        return print_json(&ToolDetails {
            tool,
            category_name: category.map(|c| c.name.as_str()),
        });
    }

    println!("{} ({})", tool.name.bold(), tool.id.green());
    println!("  {}", tool.description);
    println!();
    match category {
        Some(c) => println!("  {}: {} ({})", "Category".dimmed(), c.name, c.path.dimmed()),
        None => println!("  {}: {}", "Category".dimmed(), tool.category),
    }
    println!("  {}:     {}", "Path".dimmed(), tool.path.cyan());
    println!("  {}:     {}", "Icon".dimmed(), tool.icon);
    if tool.popular {
        println!("  {}:  {}", "Popular".dimmed(), "yes".green());
    }

    Ok(())
}
