//! Categories command

use colored::Colorize;
use serde::Serialize;
use toolkit_registry::{Catalog, Category};

use super::print_json;
use crate::config::OutputFormat;
use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct CategorySummary<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub tool_count: usize,
}

pub fn summarize(catalog: &Catalog) -> Vec<CategorySummary<'_>> {
    catalog
        .categories()
        .map(|category| CategorySummary {
            category,
            tool_count: catalog.tools_by_category(&category.id).len(),
        })
        .collect()
}

/// Run the categories command
pub fn run_categories(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let summary = summarize(catalog);

    if format == OutputFormat::Json {
        return print_json(&summary);
    }

    println!("{}", "Categories".bold());
    println!();
    for entry in &summary {
        println!(
            "  {:<14} {:<14} {:>3} tools  {}",
            entry.category.id.green(),
            entry.category.name,
            entry.tool_count,
            entry.category.path.dimmed()
        );
    }
    println!();
    println!(
        "Use {} to see the tools in one.",
        "toolkit list --category <id>".cyan()
    );

    Ok(())
}
