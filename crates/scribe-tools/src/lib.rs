//! Scribe Tools
//!
//! Tool implementations built on `scribe-core`.

pub mod tools;

pub use tools::file_ops::FileWriteTool;

use scribe_core::tools::Tool;
use std::sync::Arc;

/// All tools this crate provides, ready to register with a
/// [`scribe_core::ToolExecutor`]
pub fn get_default_tools() -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(FileWriteTool::new())]
}
