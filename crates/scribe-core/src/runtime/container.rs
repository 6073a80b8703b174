//! Container manager contract

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors raised by container managers
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The container runtime binary could not be spawned
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The runtime ran but reported failure
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The container is not running
    #[error("container '{0}' is not running")]
    NotRunning(String),
}

/// Manages the container that mirrors the agent's sandbox
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContainerManager: Send + Sync {
    /// Container name
    fn name(&self) -> &str;

    /// Ensure the container exists and is running
    async fn start_container(&self) -> Result<(), ContainerError>;

    /// Copy a local file into the running container
    async fn copy_to_container(&self, local: &Path, remote: &str) -> Result<(), ContainerError>;

    /// Stop the container
    async fn stop_container(&self) -> Result<(), ContainerError>;
}
