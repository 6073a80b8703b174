//! Tool trait implementation and container mirroring

use super::schema::{self, DESCRIPTION, TOOL_NAME};
use super::types::FileWriteTool;
use super::validation::WriteRequest;
use super::writer::WriteOutcome;
use async_trait::async_trait;
use scribe_core::agent::{AgentContext, ToolState};
use scribe_core::logging::LogKind;
use scribe_core::tools::base::{FileSystemTool, Tool, ToolError};
use scribe_core::tools::types::{ToolCall, ToolResult, ToolSchema};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, error, instrument, warn};

const NO_CONTAINER: &str = "Docker container manager is not initialized.";

#[async_trait]
impl Tool for FileWriteTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        schema::schema()
    }

    #[instrument(skip(self, call, agent), fields(call_id = %call.id, agent = %agent.name()))]
    async fn execute(
        &self,
        call: &ToolCall,
        agent: &mut AgentContext,
    ) -> Result<ToolResult, ToolError> {
        let kvps: BTreeMap<String, serde_json::Value> = call
            .arguments
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        agent
            .log()
            .log_with_kvps(LogKind::Info, "execute kwargs", "", kvps);

        if agent.handle_intervention().is_some() {
            return Err(ToolError::Cancelled);
        }
        self.prepare_state(agent, false).await?;

        let extras: Vec<&str> = call
            .arguments
            .keys()
            .map(String::as_str)
            .filter(|key| !WriteRequest::KNOWN_ARGUMENTS.contains(key))
            .collect();
        if !extras.is_empty() {
            debug!(?extras, "Ignoring unknown arguments");
        }

        let outcome = match WriteRequest::from_call(call) {
            Ok(request) => {
                let outcome = self.write_request(&request).await;
                if let WriteOutcome::Written { local_path, .. } = &outcome {
                    self.copy_to_container(agent, local_path, &request.container_path())
                        .await;
                }
                outcome
            }
            Err(err) => {
                warn!(%err, "Rejected write_file arguments");
                WriteOutcome::from(err)
            }
        };

        if let WriteOutcome::IoFailed(err) = &outcome {
            error!(%err, "Failed to write file");
        }
        Ok(outcome.into_result(&call.id, self.name()))
    }
}

impl FileSystemTool for FileWriteTool {
    fn sandbox_root(&self) -> &Path {
        &self.sandbox_root
    }
}

impl FileWriteTool {
    /// Get the agent's tool state, creating it on first use or when `reset` is set
    ///
    /// # Errors
    ///
    /// Fails when the container cannot be started or the shell cannot
    /// connect; no file is written in that case.
    pub async fn prepare_state<'a>(
        &self,
        agent: &'a mut AgentContext,
        reset: bool,
    ) -> Result<&'a mut ToolState, ToolError> {
        Ok(agent.prepare_tool_state(reset).await?)
    }

    /// Mirror a written file into the container
    ///
    /// Failures are reported to the console and the execution log only.
    async fn copy_to_container(&self, agent: &mut AgentContext, local: &Path, remote: &str) {
        let container = agent
            .tool_state()
            .and_then(|state| state.container().cloned());

        let copied = match container {
            Some(container) => container
                .copy_to_container(local, remote)
                .await
                .map_err(|e| e.to_string()),
            None => Err(NO_CONTAINER.to_string()),
        };

        match copied {
            Ok(()) => agent.display().print_notice(&format!(
                "File transferred to Docker container at {}.",
                remote
            )),
            Err(err) => {
                agent.display().print_error(&format!(
                    "Error transferring file to Docker container: {}",
                    err
                ));
                agent.log().log(LogKind::Error, "Docker Copy Error", err);
            }
        }
    }
}
