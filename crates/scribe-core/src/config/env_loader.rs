//! Environment variable overrides

use super::agent_config::AgentConfig;
use crate::error::{ScribeError, ScribeResult};
use std::env;
use std::path::PathBuf;

/// Apply `SCRIBE_*` environment overrides on top of a loaded configuration
pub fn apply_env_overrides(config: &mut AgentConfig) -> ScribeResult<()> {
    if let Ok(name) = env::var("SCRIBE_AGENT_NAME") {
        config.agent_name = name;
    }

    if let Ok(root) = env::var("SCRIBE_SANDBOX_ROOT") {
        config.sandbox_root = Some(PathBuf::from(root));
    }

    if let Ok(dir) = env::var("SCRIBE_PROMPTS_DIR") {
        config.prompts_dir = Some(PathBuf::from(dir));
    }

    if let Ok(enabled) = env::var("SCRIBE_DOCKER_ENABLED") {
        config.code_exec_docker_enabled = parse_bool(&enabled)
            .ok_or_else(|| ScribeError::config("Invalid SCRIBE_DOCKER_ENABLED value"))?;
    }

    if let Ok(name) = env::var("SCRIBE_DOCKER_NAME") {
        config.code_exec_docker_name = name;
    }

    if let Ok(image) = env::var("SCRIBE_DOCKER_IMAGE") {
        config.code_exec_docker_image = image;
    }

    if let Ok(level) = env::var("SCRIBE_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
