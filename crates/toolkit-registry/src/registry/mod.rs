//! Tool catalog - single source of truth
//!
//! Category and tool descriptors, the built-in definitions, the
//! read-only [`Catalog`] and its search policy.

mod builtins;
mod search;
mod store;
mod types;

pub use builtins::{
    BUILTIN_CATEGORY_COUNT, BUILTIN_TOOL_COUNT, builtin_categories, builtin_tools,
};
pub use search::SearchQuery;
pub use store::{Catalog, CatalogBuilder};
pub use types::{Category, Tool};
