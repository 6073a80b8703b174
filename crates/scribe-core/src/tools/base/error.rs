//! Error types for tool operations

use crate::error::ScribeError;

/// Error type for tool operations
///
/// Argument problems a tool can explain to the model are returned as a
/// [`crate::tools::ToolResult`] message instead; these errors abort the call.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cancelled by a user intervention
    #[error("Tool execution cancelled")]
    Cancelled,

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<ScribeError> for ToolError {
    fn from(err: ScribeError) -> Self {
        ToolError::ExecutionFailed(err.to_string())
    }
}

impl From<ToolError> for ScribeError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(name) => ScribeError::tool(name, "Tool not found"),
            other => ScribeError::tool("unknown", other.to_string()),
        }
    }
}
