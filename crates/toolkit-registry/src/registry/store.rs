//! Catalog storage

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

use super::{Category, SearchQuery, Tool};
use crate::error::{Error, Result};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    CatalogBuilder::with_builtins()
        .build()
        .unwrap_or_else(|err| panic!("built-in catalog definitions are invalid: {err}"))
});

/// Read-only catalog of tools and categories.
///
/// Provides lookup by id or path, filtering by category, and substring
/// search. Every listing follows definition order. There is no mutation
/// API; build a catalog with [`CatalogBuilder`] or use [`Catalog::builtin`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: IndexMap<String, Category>,
    tools: IndexMap<String, Tool>,
    /// Maps tool path to tool id
    paths: HashMap<String, String>,
}

impl Catalog {
    /// The process-wide built-in catalog.
    ///
    /// Assembled on first access and shared by reference afterwards.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Get a tool by id.
    pub fn tool_by_id(&self, id: &str) -> Option<&Tool> {
        let tool = self.tools.get(id);
        tracing::trace!(id, found = tool.is_some(), "tool lookup");
        tool
    }

    /// Get a category by id.
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Get a tool by its navigation path.
    pub fn tool_by_path(&self, path: &str) -> Option<&Tool> {
        self.paths.get(path).and_then(|id| self.tools.get(id))
    }

    /// Resolve the category a tool belongs to.
    pub fn category_of(&self, tool: &Tool) -> Option<&Category> {
        self.categories.get(&tool.category)
    }

    /// All tools in a category, in definition order.
    ///
    /// Unknown and empty categories both yield an empty vector.
    pub fn tools_by_category(&self, category_id: &str) -> Vec<&Tool> {
        self.tools
            .values()
            .filter(|t| t.in_category(category_id))
            .collect()
    }

    /// Tools flagged as popular, in definition order.
    pub fn popular_tools(&self) -> Vec<&Tool> {
        self.tools.values().filter(|t| t.popular).collect()
    }

    /// Case-insensitive substring search over tool names and descriptions.
    ///
    /// Results keep definition order. Blank queries match nothing.
    pub fn search_tools(&self, query: &str) -> Vec<&Tool> {
        let Some(query) = SearchQuery::parse(query) else {
            return Vec::new();
        };
        let hits: Vec<_> = self.tools.values().filter(|t| query.matches(t)).collect();
        tracing::trace!(needle = query.needle(), hits = hits.len(), "tool search");
        hits
    }

    /// Iterate over all tools in definition order.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Iterate over all categories in definition order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Get the number of tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Get the number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Collects category and tool definitions and validates them into a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
    tools: Vec<Tool>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with all built-in definitions.
    pub fn with_builtins() -> Self {
        Self::new()
            .categories(super::builtins::builtin_categories())
            .tools(super::builtins::builtin_tools())
    }

    /// Add a category.
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Add several categories, keeping their order.
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Add a tool.
    pub fn tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add several tools, keeping their order.
    pub fn tools(mut self, tools: impl IntoIterator<Item = Tool>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Validate the definitions and assemble the catalog.
    ///
    /// Category ids, tool ids and tool paths must be unique, ids, names and
    /// paths must be non-blank, and every tool must reference a category
    /// added to this builder. Order of insertion is preserved.
    pub fn build(self) -> Result<Catalog> {
        let mut categories = IndexMap::with_capacity(self.categories.len());
        for category in self.categories {
            let kind = format!("category '{}'", category.id);
            require(&category.id, &kind, "id")?;
            require(&category.name, &kind, "name")?;
            require(&category.path, &kind, "path")?;

            if categories.contains_key(&category.id) {
                return Err(Error::DuplicateCategory { id: category.id });
            }
            categories.insert(category.id.clone(), category);
        }

        let mut tools: IndexMap<String, Tool> = IndexMap::with_capacity(self.tools.len());
        let mut paths: HashMap<String, String> = HashMap::with_capacity(self.tools.len());
        for tool in self.tools {
            let kind = format!("tool '{}'", tool.id);
            require(&tool.id, &kind, "id")?;
            require(&tool.name, &kind, "name")?;
            require(&tool.path, &kind, "path")?;

            if tools.contains_key(&tool.id) {
                return Err(Error::DuplicateTool { id: tool.id });
            }
            if !categories.contains_key(&tool.category) {
                return Err(Error::UnknownCategory {
                    tool: tool.id,
                    category: tool.category,
                });
            }
            if let Some(first) = paths.get(&tool.path) {
                return Err(Error::DuplicatePath {
                    path: tool.path,
                    first: first.clone(),
                    second: tool.id,
                });
            }

            paths.insert(tool.path.clone(), tool.id.clone());
            tools.insert(tool.id.clone(), tool);
        }

        tracing::debug!(
            categories = categories.len(),
            tools = tools.len(),
            "catalog assembled"
        );

        Ok(Catalog {
            categories,
            tools,
            paths,
        })
    }
}

fn require(value: &str, kind: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::BlankField {
            kind: kind.to_string(),
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_cat(id: &str) -> Category {
        Category::new(id, id.to_uppercase(), format!("/{id}"))
    }

    fn make_tool(id: &str, category: &str) -> Tool {
        Tool::new(
            id,
            id.to_uppercase(),
            format!("{id} description"),
            category,
            format!("/tools/{id}"),
            "circle",
        )
    }

    fn ids<'a>(tools: &[&'a Tool]) -> Vec<&'a str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CatalogBuilder::new().build().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.tool_count(), 0);
        assert_eq!(catalog.category_count(), 0);
        assert!(catalog.tool_by_id("anything").is_none());
        assert!(catalog.search_tools("anything").is_empty());
    }

    #[test]
    fn test_build_and_lookup() {
        let catalog = CatalogBuilder::new()
            .category(make_cat("calc"))
            .tool(make_tool("tip", "calc"))
            .build()
            .unwrap();

        assert_eq!(catalog.tool_count(), 1);
        assert_eq!(catalog.tool_by_id("tip").unwrap().id, "tip");
        assert_eq!(catalog.category_by_id("calc").unwrap().name, "CALC");
        assert_eq!(catalog.tool_by_path("/tools/tip").unwrap().id, "tip");
        assert!(catalog.tool_by_id("unknown").is_none());
        assert!(catalog.tool_by_path("/tools/unknown").is_none());
    }

    #[test]
    fn test_tools_by_category_keeps_insertion_order() {
        let catalog = CatalogBuilder::new()
            .categories([make_cat("a"), make_cat("b")])
            .tools([
                make_tool("zeta", "a"),
                make_tool("beta", "b"),
                make_tool("alpha", "a"),
            ])
            .build()
            .unwrap();

        assert_eq!(ids(&catalog.tools_by_category("a")), vec!["zeta", "alpha"]);
        assert_eq!(ids(&catalog.tools_by_category("b")), vec!["beta"]);
        assert!(catalog.tools_by_category("c").is_empty());
    }

    #[test]
    fn test_empty_category_yields_nothing() {
        let catalog = CatalogBuilder::new()
            .categories([make_cat("a"), make_cat("empty")])
            .tool(make_tool("one", "a"))
            .build()
            .unwrap();

        assert!(catalog.category_by_id("empty").is_some());
        assert!(catalog.tools_by_category("empty").is_empty());
    }

    #[test]
    fn test_category_of() {
        let catalog = CatalogBuilder::new()
            .category(make_cat("a"))
            .tool(make_tool("one", "a"))
            .build()
            .unwrap();

        let tool = catalog.tool_by_id("one").unwrap();
        assert_eq!(catalog.category_of(tool).unwrap().id, "a");
    }

    #[test]
    fn test_popular_tools() {
        let catalog = CatalogBuilder::new()
            .category(make_cat("a"))
            .tools([
                make_tool("one", "a").popular(),
                make_tool("two", "a"),
                make_tool("three", "a").popular(),
            ])
            .build()
            .unwrap();

        assert_eq!(ids(&catalog.popular_tools()), vec!["one", "three"]);
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let catalog = CatalogBuilder::new()
            .category(make_cat("a"))
            .tools([make_tool("zz-shared", "a"), make_tool("aa-shared", "a")])
            .build()
            .unwrap();

        assert_eq!(
            ids(&catalog.search_tools("SHARED")),
            vec!["zz-shared", "aa-shared"]
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = CatalogBuilder::new()
            .categories([make_cat("a"), make_cat("a")])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::DuplicateCategory { id: "a".into() });
    }

    #[test]
    fn test_duplicate_tool_rejected() {
        let err = CatalogBuilder::new()
            .category(make_cat("a"))
            .tools([make_tool("one", "a"), make_tool("one", "a")])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::DuplicateTool { id: "one".into() });
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut second = make_tool("two", "a");
        second.path = "/tools/one".into();

        let err = CatalogBuilder::new()
            .category(make_cat("a"))
            .tools([make_tool("one", "a"), second])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicatePath {
                path: "/tools/one".into(),
                first: "one".into(),
                second: "two".into(),
            }
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = CatalogBuilder::new()
            .category(make_cat("a"))
            .tool(make_tool("one", "missing"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownCategory {
                tool: "one".into(),
                category: "missing".into(),
            }
        );
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut tool = make_tool("one", "a");
        tool.name = "  ".into();

        let err = CatalogBuilder::new()
            .category(make_cat("a"))
            .tool(tool)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::BlankField {
                kind: "tool 'one'".into(),
                field: "name",
            }
        );

        let err = CatalogBuilder::new()
            .category(Category::new("", "Nameless", "/nameless"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::BlankField { field: "id", .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownCategory {
            tool: "one".into(),
            category: "missing".into(),
        };
        assert_eq!(
            err.to_string(),
            "Tool 'one' references unknown category 'missing'"
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = Catalog::builtin() as *const Catalog;
        let b = Catalog::builtin() as *const Catalog;
        assert_eq!(a, b);
    }
}
