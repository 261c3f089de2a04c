use thiserror::Error;

pub use sqlshape_core::CompileError;

use crate::decode::Path;

/// Errors raised while reading a descriptor document
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No recognized shape matched the node
    #[error("unknown {kind} shape at {path}")]
    UnknownShape { kind: &'static str, path: Path },

    /// A recognized node whose keys hold the wrong kind of value
    #[error("invalid value at {path}: {reason}")]
    Invalid { path: Path, reason: String },

    /// The document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid YAML
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DecodeError {
    pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        DecodeError::Invalid {
            path: path.clone(),
            reason: reason.into(),
        }
    }

    /// Location of the failing node, when the error has one
    pub fn path(&self) -> Option<&Path> {
        match self {
            DecodeError::UnknownShape { path, .. } | DecodeError::Invalid { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// A statement was requested that its inputs do not allow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// UPDATE and DELETE refuse to run against a whole table
    #[error("WHERE condition is required for {operation} operations")]
    MissingWhereClause { operation: &'static str },
}

/// Any error the crate can return
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Result type for sqlshape operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
