//! Integration tests for the write_file tool driven through the executor

use scribe_core::agent::{AgentContext, MessageRole};
use scribe_core::config::AgentConfig;
use scribe_core::logging::LogKind;
use scribe_core::runtime::InteractiveSession;
use scribe_core::tools::base::{FileSystemTool, Tool, ToolError};
use scribe_core::tools::types::ToolCall;
use scribe_core::tools::ToolExecutor;
use scribe_tools::{get_default_tools, FileWriteTool};
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use tempfile::TempDir;

fn local_agent(root: &std::path::Path) -> AgentContext {
    let mut config = AgentConfig::default().with_sandbox_root(root);
    config.shell = "/bin/sh".to_string();
    AgentContext::new(config).silent()
}

fn executor_for(agent: &AgentContext) -> ToolExecutor {
    let mut executor = ToolExecutor::new();
    executor.register_tool(Arc::new(FileWriteTool::for_agent(agent)));
    executor
}

#[tokio::test]
async fn test_write_through_executor() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("work_dir");
    let mut agent = local_agent(&root);
    let executor = executor_for(&agent);

    let call = ToolCall::from_json(
        "call-7",
        "write_file",
        json!({
            "filename": "hello.py",
            "folder": "scripts",
            "content": "print('hello')\n"
        }),
    );
    let result = executor.execute_tool(&call, &mut agent).await.unwrap();

    assert!(result.success);
    assert!(!result.halt_loop);
    assert_eq!(result.call_id, "call-7");
    assert!(result.execution_time_ms.is_some());
    assert_eq!(
        result.message,
        "File written successfully at scripts/hello.py."
    );
    assert_eq!(
        std::fs::read_to_string(root.join("scripts/hello.py")).unwrap(),
        "print('hello')\n"
    );

    // The shared state was built once with a connected local shell
    let state = agent.tool_state_mut().unwrap();
    assert!(state.container().is_none());
    assert!(state.shell_mut().unwrap().is_connected());

    let banner = agent
        .log()
        .entries_of(LogKind::Info)
        .into_iter()
        .find(|e| e.heading == "Agent 0: Using tool 'write_file'")
        .unwrap();
    assert_eq!(banner.kvps["folder"], json!("scripts"));

    let reply = agent.history().last().unwrap();
    assert_eq!(reply.role, MessageRole::Ai);
    assert!(reply.content.contains("\"response_from_tool\": \"write_file\""));
    assert!(reply.content.contains("File written successfully at scripts/hello.py."));
}

#[tokio::test]
async fn test_rejected_arguments_reach_history() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("work_dir");
    let mut agent = local_agent(&root);
    let executor = executor_for(&agent);

    let call = ToolCall::from_json(
        "call-8",
        "write_file",
        json!({"filename": "a/b.txt", "folder": ".", "content": "x"}),
    );
    let result = executor.execute_tool(&call, &mut agent).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.message, "File name should not contain '/'.");
    let reply = agent.history().last().unwrap();
    assert!(reply.content.contains("File name should not contain '/'."));
}

#[tokio::test]
async fn test_intervention_before_execution() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("work_dir");
    let mut agent = local_agent(&root);
    let executor = executor_for(&agent);
    agent.queue_intervention("wait, use another name");

    let call = ToolCall::from_json(
        "call-9",
        "write_file",
        json!({"filename": "a.txt", "folder": ".", "content": "x"}),
    );
    let err = executor.execute_tool(&call, &mut agent).await.unwrap_err();

    assert!(matches!(err, ToolError::Cancelled));
    assert!(agent.tool_state().is_none());
    assert!(!root.join("a.txt").exists());
}

#[tokio::test]
async fn test_unknown_tool() {
    let temp_dir = TempDir::new().unwrap();
    let mut agent = local_agent(temp_dir.path());
    let executor = executor_for(&agent);

    let call = ToolCall::from_json("call-10", "read_file", json!({}));
    let err = executor.execute_tool(&call, &mut agent).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound(name) if name == "read_file"));
}

#[test]
fn test_default_tools() {
    let tools = get_default_tools();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name(), "write_file");
}

#[test]
#[serial]
fn test_default_root_is_work_dir_under_cwd() {
    let original = std::env::current_dir().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let expected = std::env::current_dir().unwrap().join("work_dir");
    let tool = FileWriteTool::new();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(tool.sandbox_root(), expected.as_path());
}
