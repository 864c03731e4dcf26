//! Tool catalog for the Toolkit widget collection.
//!
//! This crate holds the fixed set of browser widgets (calculators,
//! converters, text utilities, generators) and the categories they are
//! grouped under, and answers the lookup and search queries that page
//! renderers make against it.
//!
//! # Architecture
//!
//! The catalog is defined once ([`builtin_categories`], [`builtin_tools`]) and
//! assembled into a [`Catalog`] on first access. After that it is read-only:
//!
//! 1. **Lookups** - [`tool_by_id`], [`category_by_id`] and [`tool_by_path`]
//!    return `None` when nothing matches. Absence is never an error.
//!
//! 2. **Listings** - [`tools_by_category`], [`popular_tools`] and
//!    [`search_tools`] return tools in catalog definition order, or an empty
//!    vector when nothing matches.
//!
//! Custom catalogs can be assembled with [`CatalogBuilder`], which validates
//! id and path uniqueness and category references.

pub mod error;
pub mod registry;

pub use error::{Error, Result};
pub use registry::{
    BUILTIN_CATEGORY_COUNT, BUILTIN_TOOL_COUNT, Catalog, CatalogBuilder, Category, SearchQuery,
    Tool, builtin_categories, builtin_tools,
};

/// Look up a built-in tool by id.
pub fn tool_by_id(id: &str) -> Option<&'static Tool> {
    Catalog::builtin().tool_by_id(id)
}

/// Look up a built-in category by id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    Catalog::builtin().category_by_id(id)
}

/// Look up a built-in tool by its navigation path.
pub fn tool_by_path(path: &str) -> Option<&'static Tool> {
    Catalog::builtin().tool_by_path(path)
}

/// All built-in tools in a category, in definition order.
pub fn tools_by_category(category_id: &str) -> Vec<&'static Tool> {
    Catalog::builtin().tools_by_category(category_id)
}

/// Built-in tools flagged as popular, in definition order.
pub fn popular_tools() -> Vec<&'static Tool> {
    Catalog::builtin().popular_tools()
}

/// Case-insensitive search over built-in tool names and descriptions.
pub fn search_tools(query: &str) -> Vec<&'static Tool> {
    Catalog::builtin().search_tools(query)
}
