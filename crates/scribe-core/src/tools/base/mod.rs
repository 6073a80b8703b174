//! Base trait and types for tools
//!
//! - [`Tool`] - The contract every tool implements, including the
//!   `before_execution` / `after_execution` lifecycle hooks
//! - [`ToolError`] - Error types for tool operations
//! - [`FileSystemTool`] - Helper trait for tools confined to a sandbox root
//!
//! # Examples
//!
//! ```no_run
//! use scribe_core::agent::AgentContext;
//! use scribe_core::tools::{Tool, ToolSchema};
//! use scribe_core::tools::base::ToolError;
//! use scribe_core::tools::types::{ToolCall, ToolResult};
//! use async_trait::async_trait;
//!
//! struct MyTool;
//!
//! #[async_trait]
//! impl Tool for MyTool {
//!     fn name(&self) -> &str { "my_tool" }
//!     fn description(&self) -> &str { "A custom tool" }
//!     fn schema(&self) -> ToolSchema {
//!         ToolSchema::new(self.name(), self.description(), vec![])
//!     }
//!     async fn execute(
//!         &self,
//!         call: &ToolCall,
//!         _agent: &mut AgentContext,
//!     ) -> Result<ToolResult, ToolError> {
//!         Ok(ToolResult::new(&call.id, self.name(), "done"))
//!     }
//! }
//! ```

pub mod error;
pub mod filesystem_tool;
pub mod tool_trait;


pub use error::ToolError;
pub use filesystem_tool::FileSystemTool;
pub use tool_trait::Tool;
