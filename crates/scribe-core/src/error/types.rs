//! Core error types for Scribe

use crate::runtime::{ContainerError, ShellError};
use thiserror::Error;

/// Result type alias for Scribe operations
pub type ScribeResult<T> = Result<T, ScribeError>;

/// Main error type for Scribe
#[derive(Error, Debug)]
pub enum ScribeError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
    },

    /// Container lifecycle or transfer errors
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// Local shell session errors
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    /// Prompt template errors
    #[error("Prompt error: {message}")]
    Prompt { message: String, name: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Tool execution errors
    #[error("Tool error: {tool_name}: {message}")]
    Tool { tool_name: String, message: String },
}

impl ScribeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a file
    pub fn config_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a prompt error
    pub fn prompt(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
            name: name.into(),
        }
    }

    /// Create an IO error tied to a path
    pub fn io_at(err: &std::io::Error, path: impl Into<String>) -> Self {
        Self::Io {
            message: err.to_string(),
            path: Some(path.into()),
        }
    }

    /// Create a tool error
    pub fn tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "SCRIBE_CONFIG",
            Self::Container(_) => "SCRIBE_CONTAINER",
            Self::Shell(_) => "SCRIBE_SHELL",
            Self::Prompt { .. } => "SCRIBE_PROMPT",
            Self::Io { .. } => "SCRIBE_IO",
            Self::Tool { .. } => "SCRIBE_TOOL",
        }
    }
}

impl From<std::io::Error> for ScribeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<toml::de::Error> for ScribeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {}", err))
    }
}
