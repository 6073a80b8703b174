use super::*;
use crate::config::AgentConfig;
use crate::runtime::{
    ContainerError, ContainerManager, InteractiveSession, MockContainerManager, RuntimeFactory,
    ShellError, ShellOutput,
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

struct CountingShell {
    connects: Arc<AtomicUsize>,
    connected: bool,
}

#[async_trait]
impl InteractiveSession for CountingShell {
    async fn connect(&mut self) -> Result<(), ShellError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.connected = true;
        Ok(())
    }

    async fn send_command(&mut self, _command: &str) -> Result<(), ShellError> {
        Ok(())
    }

    async fn read_output(&mut self, _idle: Duration) -> Result<ShellOutput, ShellError> {
        Ok(ShellOutput::default())
    }

    async fn close(&mut self) -> Result<(), ShellError> {
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

struct FakeRuntime {
    container: Option<Arc<MockContainerManager>>,
    connects: Arc<AtomicUsize>,
}

impl FakeRuntime {
    fn new(container: Option<MockContainerManager>) -> Self {
        Self {
            container: container.map(Arc::new),
            connects: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl RuntimeFactory for FakeRuntime {
    fn create_container(
        &self,
        _config: &AgentConfig,
    ) -> Result<Arc<dyn ContainerManager>, ContainerError> {
        match &self.container {
            Some(container) => Ok(container.clone() as Arc<dyn ContainerManager>),
            None => Err(ContainerError::NotRunning("unconfigured".to_string())),
        }
    }

    fn create_shell(&self, _config: &AgentConfig) -> Box<dyn InteractiveSession> {
        Box::new(CountingShell {
            connects: self.connects.clone(),
            connected: false,
        })
    }
}

fn context_with(config: AgentConfig, runtime: Arc<FakeRuntime>) -> AgentContext {
    AgentContext::new(config).with_runtime(runtime).silent()
}

#[tokio::test]
async fn test_state_is_created_once() {
    let runtime = Arc::new(FakeRuntime::new(None));
    let mut agent = context_with(AgentConfig::default(), runtime.clone());
    assert!(agent.tool_state().is_none());

    let state = agent.prepare_tool_state(false).await.unwrap();
    assert!(state.container().is_none());
    assert!(state.shell_mut().unwrap().is_connected());

    agent.prepare_tool_state(false).await.unwrap();
    assert_eq!(runtime.connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_reset_rebuilds_state() {
    let runtime = Arc::new(FakeRuntime::new(None));
    let mut agent = context_with(AgentConfig::default(), runtime.clone());

    agent.prepare_tool_state(false).await.unwrap();
    agent.prepare_tool_state(true).await.unwrap();
    assert_eq!(runtime.connects.load(Ordering::SeqCst), 2);
    assert!(agent.tool_state().is_some());
}

#[tokio::test]
async fn test_docker_enabled_starts_container() {
    let mut container = MockContainerManager::new();
    container.expect_start_container().times(1).returning(|| Ok(()));

    let runtime = Arc::new(FakeRuntime::new(Some(container)));
    let config = AgentConfig::default().with_docker("box", "alpine");
    let mut agent = context_with(config, runtime);

    let state = agent.prepare_tool_state(false).await.unwrap();
    assert!(state.container().is_some());
}

#[tokio::test]
async fn test_container_start_failure_propagates() {
    let mut container = MockContainerManager::new();
    container.expect_start_container().returning(|| {
        Err(ContainerError::CommandFailed {
            command: "docker run".to_string(),
            stderr: "pull access denied".to_string(),
        })
    });

    let runtime = Arc::new(FakeRuntime::new(Some(container)));
    let config = AgentConfig::default().with_docker("box", "alpine");
    let mut agent = context_with(config, runtime.clone());

    let err = agent.prepare_tool_state(false).await.unwrap_err();
    assert_eq!(err.error_code(), "SCRIBE_CONTAINER");
    assert!(err.to_string().contains("pull access denied"));
    assert!(agent.tool_state().is_none());
    // The shell is only connected once the container is up
    assert_eq!(runtime.connects.load(Ordering::SeqCst), 0);
}

#[test]
fn test_messages_and_interventions() {
    let mut agent = AgentContext::new(AgentConfig::default()).silent();
    assert!(agent.handle_intervention().is_none());

    agent.append_message("tool said hi", false);
    agent.queue_intervention("wait");
    assert_eq!(agent.handle_intervention().as_deref(), Some("wait"));
    assert!(agent.handle_intervention().is_none());

    let roles: Vec<MessageRole> = agent.history().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![MessageRole::Ai, MessageRole::Human]);
}

#[test]
fn test_sandbox_root() {
    let agent = AgentContext::new(AgentConfig::default().with_sandbox_root("/srv/sandbox"));
    assert_eq!(agent.sandbox_root(), PathBuf::from("/srv/sandbox"));

    let agent = AgentContext::new(AgentConfig::default());
    assert!(agent.sandbox_root().ends_with("work_dir"));
}

#[test]
fn test_console_follows_logging_config() {
    let mut config = AgentConfig::default();
    config.logging.log_to_console = false;
    let agent = AgentContext::new(config);
    assert!(!agent.display().is_enabled());
    assert_eq!(agent.name(), "Agent 0");
}
