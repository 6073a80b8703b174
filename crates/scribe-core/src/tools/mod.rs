//! Tool system for Scribe

pub mod base;
pub mod executor;
pub mod types;

pub use base::{FileSystemTool, Tool, ToolError};
pub use executor::ToolExecutor;
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
