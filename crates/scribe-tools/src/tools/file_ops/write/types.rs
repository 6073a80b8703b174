//! Type definitions for the `write_file` tool

use scribe_core::agent::AgentContext;
use scribe_core::config::AgentConfig;
use std::path::PathBuf;

/// Tool that writes text files into the sandbox and the container
///
/// Files land at `<sandbox_root>/<folder>/<filename>` locally and at
/// `/root/<folder>/<filename>` inside the container.
#[derive(Debug, Clone)]
pub struct FileWriteTool {
    pub(crate) sandbox_root: PathBuf,
}

impl FileWriteTool {
    /// Create a tool rooted at `<cwd>/work_dir`
    pub fn new() -> Self {
        Self {
            sandbox_root: std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(AgentConfig::DEFAULT_SANDBOX_DIR),
        }
    }

    /// Create a tool with a specific sandbox root
    pub fn with_sandbox_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            sandbox_root: root.into(),
        }
    }

    /// Create a tool rooted wherever the agent's configuration says
    pub fn for_agent(agent: &AgentContext) -> Self {
        Self::with_sandbox_root(agent.sandbox_root())
    }
}

impl Default for FileWriteTool {
    fn default() -> Self {
        Self::new()
    }
}
