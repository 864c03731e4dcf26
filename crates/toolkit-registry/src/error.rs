//! Error types for toolkit-registry

pub type Result<T> = std::result::Result<T, Error>;

/// Catalog construction failures.
///
/// Only [`CatalogBuilder::build`](crate::CatalogBuilder::build) produces these.
/// Lookups and searches report absence through `Option` and empty vectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Duplicate category id: {id}")]
    DuplicateCategory { id: String },

    #[error("Duplicate tool id: {id}")]
    DuplicateTool { id: String },

    #[error("Duplicate path {path} used by '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("Tool '{tool}' references unknown category '{category}'")]
    UnknownCategory { tool: String, category: String },

    #[error("Blank {field} on {kind}")]
    BlankField { kind: String, field: &'static str },
}
