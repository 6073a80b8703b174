//! Write a file through the executor and mirror it into the container
//!
//! Configuration comes from `~/.config/scribe/config.toml` (or the platform
//! equivalent) and `SCRIBE_*` environment variables. Set
//! `SCRIBE_DOCKER_ENABLED=true` to copy the file into a running container.
//!
//! ```bash
//! cargo run -p scribe-tools --example write_file_demo
//! ```

use anyhow::Context;
use scribe_core::agent::AgentContext;
use scribe_core::config::load_config;
use scribe_core::logging::init_tracing;
use scribe_core::tools::ToolExecutor;
use scribe_core::tools::types::ToolCall;
use scribe_tools::FileWriteTool;
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(None).context("loading configuration")?;
    init_tracing(&config.logging);

    let mut agent = AgentContext::new(config);
    let mut executor = ToolExecutor::new();
    executor.register_tool(Arc::new(FileWriteTool::for_agent(&agent)));

    let call = ToolCall::from_json(
        "demo-1",
        "write_file",
        json!({
            "filename": "hello.sh",
            "folder": "scripts",
            "content": "#!/bin/sh\necho hello from scribe\n"
        }),
    );

    let result = executor
        .execute_tool(&call, &mut agent)
        .await
        .context("running write_file")?;

    println!("{}", result.message);
    if let Some(reply) = agent.history().last() {
        println!("{}", reply.content);
    }
    Ok(())
}
