//! Tool execution engine

use crate::agent::AgentContext;
use crate::tools::base::{Tool, ToolError};
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Dispatches tool calls through the tool lifecycle
///
/// Calls for one agent run strictly one after another: every call borrows
/// the agent's context mutably.
#[derive(Default)]
pub struct ToolExecutor {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolExecutor {
    /// Create an empty tool executor
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            warn!("Tool '{}' registered twice; keeping the latest", name);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all registered tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Schemas of all registered tools, sorted by name
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tool_names()
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.schema())
            .collect()
    }

    /// Run one call: `before_execution`, `execute`, `after_execution`
    #[instrument(skip(self, call, agent), fields(call_id = %call.id, tool = %call.name))]
    pub async fn execute_tool(
        &self,
        call: &ToolCall,
        agent: &mut AgentContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;

        let start_time = Instant::now();
        tool.before_execution(call, agent).await?;

        let mut result = tool.execute(call, agent).await?;
        result.call_id = call.id.clone();
        result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);

        tool.after_execution(call, &result, agent).await?;
        debug!(
            success = result.success,
            halt_loop = result.halt_loop,
            "{}",
            tool.render_call(call)
        );
        Ok(result)
    }
}
