//! Core types for the tool catalog

use serde::{Deserialize, Serialize};

/// A named grouping of tools with its own navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Machine identifier (e.g., "calculators")
    pub id: String,
    /// Display label (e.g., "Calculators")
    pub name: String,
    /// Canonical navigation path (e.g., "/calculators")
    pub path: String,
}

impl Category {
    /// Create a new category descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One widget page in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tool {
    /// Machine identifier (e.g., "tip-calculator")
    pub id: String,
    /// Display name (e.g., "Tip Calculator")
    pub name: String,
    /// One-line summary shown on cards and in search results
    pub description: String,
    /// Id of the owning category
    pub category: String,
    /// Canonical navigation path (e.g., "/tools/tip-calculator")
    pub path: String,
    /// Symbolic icon name for the presentation layer
    pub icon: String,
    /// Featured on the home page
    #[serde(default)]
    pub popular: bool,
}

impl Tool {
    /// Create a new tool descriptor. Tools are not popular by default.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        path: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            path: path.into(),
            icon: icon.into(),
            popular: false,
        }
    }

    /// Flag the tool as popular (builder pattern).
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    /// Check if the tool belongs to the given category.
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category == category_id
    }
}
