//! Tree and menu error types

use thiserror::Error;

/// Result type for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Tree parsing and selection errors
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to parse window tree: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No window selected")]
    EmptySelection,

    #[error("Selection does not end with a container id: {0:?}")]
    MalformedSelection(String),
}
