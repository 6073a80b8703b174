//! Agent context passed into tool calls

use super::history::{Message, MessageRole};
use super::state::ToolState;
use crate::config::AgentConfig;
use crate::error::ScribeResult;
use crate::logging::{ExecutionLog, LogKind};
use crate::prompts::PromptLoader;
use crate::runtime::{DefaultRuntime, RuntimeFactory};
use crate::ui::DisplayManager;
use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Everything a tool may touch on behalf of one agent
pub struct AgentContext {
    id: Uuid,
    config: AgentConfig,
    log: ExecutionLog,
    display: DisplayManager,
    prompts: PromptLoader,
    history: Vec<Message>,
    tool_state: Option<ToolState>,
    runtime: Arc<dyn RuntimeFactory>,
    interventions: VecDeque<String>,
}

impl AgentContext {
    /// Create a context with the default runtime (Docker CLI, local shell)
    pub fn new(config: AgentConfig) -> Self {
        let display = if config.logging.log_to_console {
            DisplayManager::new()
        } else {
            DisplayManager::silent()
        };
        let prompts = match &config.prompts_dir {
            Some(dir) => PromptLoader::with_dir(dir),
            None => PromptLoader::new(),
        };

        Self {
            id: Uuid::new_v4(),
            config,
            log: ExecutionLog::new(),
            display,
            prompts,
            history: Vec::new(),
            tool_state: None,
            runtime: Arc::new(DefaultRuntime),
            interventions: VecDeque::new(),
        }
    }

    /// Replace the factory used to build container managers and shells
    pub fn with_runtime(mut self, runtime: Arc<dyn RuntimeFactory>) -> Self {
        self.runtime = runtime;
        self
    }

    /// Share an existing execution log
    pub fn with_log(mut self, log: ExecutionLog) -> Self {
        self.log = log;
        self
    }

    /// Turn off console output
    pub fn silent(mut self) -> Self {
        self.display = DisplayManager::silent();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.config.agent_name
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn log(&self) -> &ExecutionLog {
        &self.log
    }

    pub fn display(&self) -> &DisplayManager {
        &self.display
    }

    pub fn prompts(&self) -> &PromptLoader {
        &self.prompts
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Sandbox root for tool-written files
    pub fn sandbox_root(&self) -> PathBuf {
        match &self.config.sandbox_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(AgentConfig::DEFAULT_SANDBOX_DIR),
        }
    }

    /// Append a message to the conversation
    pub fn append_message(&mut self, content: impl Into<String>, human: bool) {
        let role = if human {
            MessageRole::Human
        } else {
            MessageRole::Ai
        };
        self.history.push(Message::new(role, content));
    }

    /// Queue a user message that interrupts the next tool call
    pub fn queue_intervention(&mut self, message: impl Into<String>) {
        self.interventions.push_back(message.into());
    }

    /// Consume a pending intervention
    ///
    /// The message is appended to the conversation as a human message and
    /// returned; the caller is expected to abandon the current tool call.
    pub fn handle_intervention(&mut self) -> Option<String> {
        let message = self.interventions.pop_front()?;
        info!("Intervention received for {}", self.config.agent_name);
        self.log.log(LogKind::Info, "Intervention", message.clone());
        self.append_message(message.clone(), true);
        Some(message)
    }

    pub fn tool_state(&self) -> Option<&ToolState> {
        self.tool_state.as_ref()
    }

    pub fn tool_state_mut(&mut self) -> Option<&mut ToolState> {
        self.tool_state.as_mut()
    }

    /// Get the tool state, building it on first use or when `reset` is set
    ///
    /// Building starts the container (when enabled) and connects a fresh
    /// local shell. Failures propagate and leave the agent without state.
    #[instrument(skip(self), fields(agent = %self.config.agent_name))]
    pub async fn prepare_tool_state(&mut self, reset: bool) -> ScribeResult<&mut ToolState> {
        let state = match self.tool_state.take() {
            Some(existing) if !reset => existing,
            _ => build_tool_state(self.runtime.clone(), &self.config).await?,
        };
        Ok(self.tool_state.insert(state))
    }
}

async fn build_tool_state(
    runtime: Arc<dyn RuntimeFactory>,
    config: &AgentConfig,
) -> ScribeResult<ToolState> {
    let container = if config.code_exec_docker_enabled {
        let container = runtime.create_container(config)?;
        container.start_container().await?;
        Some(container)
    } else {
        None
    };

    let mut shell = runtime.create_shell(config);
    shell.connect().await?;

    info!(
        key = ToolState::KEY,
        container = container.is_some(),
        "Tool state initialized"
    );
    Ok(ToolState::new(Some(shell), container))
}

impl fmt::Debug for AgentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentContext")
            .field("id", &self.id)
            .field("name", &self.config.agent_name)
            .field("history", &self.history.len())
            .field("tool_state", &self.tool_state)
            .finish()
    }
}
