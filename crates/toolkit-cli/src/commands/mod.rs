//! Command implementations for toolkit-cli

pub mod categories;
pub mod list;
pub mod search;
pub mod show;

pub use categories::run_categories;
pub use list::run_list;
pub use search::run_search;
pub use show::run_show;

use serde::Serialize;

use crate::error::Result;

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
