//! List command: tools grouped by category

use colored::Colorize;
use serde::Serialize;
use toolkit_registry::{Catalog, Category, Tool};

use super::print_json;
use crate::config::OutputFormat;
use crate::error::Result;

/// One category with the tools shown under it.
#[derive(Debug, Serialize)]
pub struct CategoryListing<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub tools: Vec<&'a Tool>,
}

/// Group tools by category in catalog order, skipping empty groups.
pub fn collect_listing<'a>(
    catalog: &'a Catalog,
    category_filter: Option<&str>,
    popular_only: bool,
) -> Vec<CategoryListing<'a>> {
    catalog
        .categories()
        .filter(|c| category_filter.is_none_or(|f| f == c.id))
        .map(|category| CategoryListing {
            category,
            tools: catalog
                .tools_by_category(&category.id)
                .into_iter()
                .filter(|t| !popular_only || t.popular)
                .collect(),
        })
        .filter(|listing| !listing.tools.is_empty())
        .collect()
}

/// Run the list command
pub fn run_list(
    catalog: &Catalog,
    category_filter: Option<&str>,
    popular_only: bool,
    format: OutputFormat,
) -> Result<()> {
    if let Some(filter) = category_filter {
        if catalog.category_by_id(filter).is_none() {
            let valid: Vec<_> = catalog.categories().map(|c| c.id.as_str()).collect();
            eprintln!(
                "{} Unknown category '{}'. Valid: {}",
                "warning:".yellow().bold(),
                filter,
                valid.join(", ")
            );
        }
    }

    let listing = collect_listing(catalog, category_filter, popular_only);
    tracing::debug!(groups = listing.len(), popular_only, "listing tools");

    if format == OutputFormat::Json {
        return print_json(&listing);
    }

    let title = if popular_only { "Popular Tools" } else { "Available Tools" };
    println!("{}", title.bold());
    println!();

    for group in &listing {
        println!("{}:", group.category.name.cyan().bold());
        for tool in &group.tools {
            println!("  {:<30} {}", tool.id.green(), tool.name);
        }
        println!();
    }

    let shown: usize = listing.iter().map(|g| g.tools.len()).sum();
    println!(
        "{} {} tools shown. Use {} for details.",
        "Total:".dimmed(),
        shown,
        "toolkit show <id>".cyan()
    );

    Ok(())
}
