//! Search command

use colored::Colorize;
use serde::Serialize;
use toolkit_registry::{Catalog, Tool};

use super::print_json;
use crate::config::OutputFormat;
use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct SearchResults<'a> {
    pub query: &'a str,
    pub tools: Vec<&'a Tool>,
}

/// Run the search command
///
/// An empty result is not an error: it prints a "no results" line and
/// succeeds.
pub fn run_search(catalog: &Catalog, query: &str, format: OutputFormat) -> Result<()> {
    let results = SearchResults {
        query,
        tools: catalog.search_tools(query),
    };
    tracing::debug!(query, hits = results.tools.len(), "search");

    if format == OutputFormat::Json {
        return print_json(&results);
    }

    if results.tools.is_empty() {
        println!("No tools found for '{}'", query);
        return Ok(());
    }

    let noun = if results.tools.len() == 1 { "result" } else { "results" };
    println!(
        "{} {} for '{}'",
        results.tools.len().to_string().bold(),
        noun,
        query
    );
    println!();
    for tool in &results.tools {
        println!("  {:<30} {}", tool.id.green(), tool.name);
        println!("  {:<30} {}", "", tool.description.dimmed());
    }

    Ok(())
}
