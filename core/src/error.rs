use thiserror::Error;

use crate::dialect::Dialect;

/// Errors raised while rendering a fragment for a concrete dialect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The dialect has no spelling for an operator or clause
    #[error("{feature} is not supported by the {dialect} dialect")]
    Unsupported {
        feature: &'static str,
        dialect: Dialect,
    },

    /// UPDATE was requested with no column assignments
    #[error("UPDATE requires at least one column assignment")]
    EmptyUpdate,
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, CompileError>;
