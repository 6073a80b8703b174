//! Core Tool trait definition

use super::error::ToolError;
use crate::agent::AgentContext;
use crate::logging::LogKind;
use crate::prompts::TOOL_RESPONSE_PROMPT;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Base trait for all tools
///
/// The dispatcher drives every call through `before_execution`, `execute`
/// and `after_execution`, handing each the owning agent's context.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "write_file")
    fn name(&self) -> &str;

    /// Get the tool's description for LLM understanding
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` only when the call has to be aborted; problems
    /// the model can fix are reported in the result message.
    async fn execute(
        &self,
        call: &ToolCall,
        agent: &mut AgentContext,
    ) -> Result<ToolResult, ToolError>;

    /// Announce the call: banner, argument listing and a log entry
    async fn before_execution(
        &self,
        call: &ToolCall,
        agent: &mut AgentContext,
    ) -> Result<(), ToolError> {
        if agent.handle_intervention().is_some() {
            return Err(ToolError::Cancelled);
        }

        let heading = format!("{}: Using tool '{}'", agent.name(), self.name());
        agent.display().print_tool_banner(&heading);

        let kvps: BTreeMap<String, serde_json::Value> = call
            .arguments
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, value) in &kvps {
            match value {
                serde_json::Value::String(s) => agent.display().print_argument(key, s),
                other => agent.display().print_argument(key, &other.to_string()),
            }
        }
        agent.log().log_with_kvps(LogKind::Info, heading, "", kvps);
        Ok(())
    }

    /// Feed the result back into the agent's conversation
    async fn after_execution(
        &self,
        call: &ToolCall,
        result: &ToolResult,
        agent: &mut AgentContext,
    ) -> Result<(), ToolError> {
        let _ = call;
        let response = agent.prompts().read_prompt(
            TOOL_RESPONSE_PROMPT,
            &[("tool_name", self.name()), ("tool_response", result.message.as_str())],
        )?;
        agent.append_message(response, false);
        Ok(())
    }

    /// Render the tool call for display to the user
    fn render_call(&self, call: &ToolCall) -> String {
        format!(
            "{}({})",
            self.name(),
            serde_json::to_string(&call.arguments).unwrap_or_default()
        )
    }
}
