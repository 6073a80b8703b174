//! Agent configuration

use super::logging_config::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A bind mount handed to the execution container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeMount {
    /// Path inside the container
    pub bind: String,
    /// Mount mode (`rw` or `ro`)
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "rw".to_string()
}

impl VolumeMount {
    /// Create a read-write mount
    pub fn rw(bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            mode: default_mode(),
        }
    }
}

/// Per-agent configuration consumed by tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Display name used in banners and log headings
    pub agent_name: String,
    /// Sandbox root for tool-written files (defaults to `<cwd>/work_dir`)
    pub sandbox_root: Option<PathBuf>,
    /// Directory searched for prompt overrides before the embedded ones
    pub prompts_dir: Option<PathBuf>,
    /// Shell binary for the local interactive session
    pub shell: String,
    /// Whether commands run in a Docker container
    pub code_exec_docker_enabled: bool,
    /// Container name
    pub code_exec_docker_name: String,
    /// Container image
    pub code_exec_docker_image: String,
    /// Port mappings: container port spec (e.g. `22/tcp`) to host port
    pub code_exec_docker_ports: BTreeMap<String, u16>,
    /// Volume mappings: host path to container mount
    pub code_exec_docker_volumes: BTreeMap<String, VolumeMount>,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        let mut ports = BTreeMap::new();
        ports.insert("22/tcp".to_string(), 50022);

        let mut volumes = BTreeMap::new();
        volumes.insert(
            AgentConfig::DEFAULT_SANDBOX_DIR.to_string(),
            VolumeMount::rw("/root"),
        );

        Self {
            agent_name: "Agent 0".to_string(),
            sandbox_root: None,
            prompts_dir: None,
            shell: "/bin/bash".to_string(),
            code_exec_docker_enabled: false,
            code_exec_docker_name: "scribe-exe".to_string(),
            code_exec_docker_image: "scribe/exec:latest".to_string(),
            code_exec_docker_ports: ports,
            code_exec_docker_volumes: volumes,
            logging: LoggingConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Name of the sandbox directory under the process working directory
    pub const DEFAULT_SANDBOX_DIR: &'static str = "work_dir";

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Enable container-backed execution
    pub fn with_docker(mut self, name: impl Into<String>, image: impl Into<String>) -> Self {
        self.code_exec_docker_enabled = true;
        self.code_exec_docker_name = name.into();
        self.code_exec_docker_image = image.into();
        self
    }

    /// Set the sandbox root
    pub fn with_sandbox_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sandbox_root = Some(root.into());
        self
    }
}
