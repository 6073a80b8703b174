//! Factory for runtime collaborators

use super::container::{ContainerError, ContainerManager};
use super::docker::DockerContainerManager;
use super::shell::{InteractiveSession, LocalInteractiveSession};
use crate::config::AgentConfig;
use std::sync::Arc;

/// Builds the container manager and shell session for an agent's tool state
pub trait RuntimeFactory: Send + Sync {
    /// Create (but do not start) a container manager from the agent config
    fn create_container(
        &self,
        config: &AgentConfig,
    ) -> Result<Arc<dyn ContainerManager>, ContainerError>;

    /// Create (but do not connect) a local shell session
    fn create_shell(&self, config: &AgentConfig) -> Box<dyn InteractiveSession>;
}

/// Docker CLI containers and local shell sessions
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRuntime;

impl RuntimeFactory for DefaultRuntime {
    fn create_container(
        &self,
        config: &AgentConfig,
    ) -> Result<Arc<dyn ContainerManager>, ContainerError> {
        Ok(Arc::new(DockerContainerManager::from_config(config)))
    }

    fn create_shell(&self, config: &AgentConfig) -> Box<dyn InteractiveSession> {
        Box::new(LocalInteractiveSession::new(config.shell.clone()))
    }
}
