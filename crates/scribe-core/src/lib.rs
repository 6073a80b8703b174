//! Scribe Core Library
//!
//! This crate provides the pieces every Scribe tool builds on: the per-agent
//! [`AgentContext`], the [`Tool`] contract and its dispatcher, configuration,
//! logging, and the runtime collaborators (container manager and local shell)
//! that tools drive.

pub mod agent;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompts;
pub mod runtime;
pub mod tools;
pub mod ui;

// Re-export commonly used types
pub use agent::{AgentContext, Message, MessageRole, ToolState};
pub use config::{AgentConfig, LoggingConfig, VolumeMount};
pub use error::{ScribeError, ScribeResult};
pub use logging::{ExecutionLog, LogEntry, LogKind};
pub use prompts::PromptLoader;
pub use runtime::{
    ContainerError, ContainerManager, DefaultRuntime, DockerContainerManager, InteractiveSession,
    LocalInteractiveSession, RuntimeFactory, ShellError,
};
pub use tools::{Tool, ToolCall, ToolError, ToolExecutor, ToolResult};
