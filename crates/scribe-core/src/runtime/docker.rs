//! Docker container manager driven through the `docker` CLI

use super::container::{ContainerError, ContainerManager};
use crate::config::{AgentConfig, VolumeMount};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Execute a docker command and return its stdout
pub async fn execute_docker_command(args: &[String]) -> Result<String, ContainerError> {
    let command = format!("docker {}", args.join(" "));
    debug!("Executing docker command: {}", command);

    let output = Command::new("docker")
        .args(args)
        .output()
        .await
        .map_err(|source| ContainerError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ContainerError::CommandFailed { command, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Container manager for the execution container
#[derive(Debug, Clone)]
pub struct DockerContainerManager {
    name: String,
    image: String,
    ports: BTreeMap<String, u16>,
    volumes: BTreeMap<String, VolumeMount>,
}

impl DockerContainerManager {
    /// Create a manager for `name` running `image`
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ports: BTreeMap::new(),
            volumes: BTreeMap::new(),
        }
    }

    /// Create a manager from the `code_exec_docker_*` settings
    pub fn from_config(config: &AgentConfig) -> Self {
        Self {
            name: config.code_exec_docker_name.clone(),
            image: config.code_exec_docker_image.clone(),
            ports: config.code_exec_docker_ports.clone(),
            volumes: config.code_exec_docker_volumes.clone(),
        }
    }

    /// Add a port mapping
    pub fn with_port(mut self, container_port: impl Into<String>, host_port: u16) -> Self {
        self.ports.insert(container_port.into(), host_port);
        self
    }

    /// Add a volume mapping
    pub fn with_volume(mut self, host_path: impl Into<String>, mount: VolumeMount) -> Self {
        self.volumes.insert(host_path.into(), mount);
        self
    }

    /// Arguments for `docker run` creating this container
    pub fn run_args(&self) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            self.name.clone(),
        ];

        for (container_port, host_port) in &self.ports {
            args.push("-p".to_string());
            args.push(format!("{}:{}", host_port, container_port));
        }

        for (host_path, mount) in &self.volumes {
            args.push("-v".to_string());
            args.push(format!(
                "{}:{}:{}",
                absolute_host_path(host_path).display(),
                mount.bind,
                mount.mode
            ));
        }

        args.push(self.image.clone());
        args
    }

    /// Whether the container exists, and if so whether it is running
    async fn inspect_running(&self) -> Option<bool> {
        let args = [
            "inspect".to_string(),
            "-f".to_string(),
            "{{.State.Running}}".to_string(),
            self.name.clone(),
        ];
        match execute_docker_command(&args).await {
            Ok(out) => Some(out.trim() == "true"),
            Err(_) => None,
        }
    }
}

/// Bind mounts need absolute host paths; relative ones resolve against the cwd
fn absolute_host_path(host_path: &str) -> PathBuf {
    let path = Path::new(host_path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Parent directory of a container path, if it has a non-root one
fn remote_parent(remote: &str) -> Option<&str> {
    let trimmed = remote.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => None,
        Some(idx) => Some(&trimmed[..idx]),
    }
}

#[async_trait]
impl ContainerManager for DockerContainerManager {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(container = %self.name, image = %self.image))]
    async fn start_container(&self) -> Result<(), ContainerError> {
        match self.inspect_running().await {
            Some(true) => {
                debug!("Container '{}' already running", self.name);
            }
            Some(false) => {
                info!("Starting existing container '{}'", self.name);
                execute_docker_command(&["start".to_string(), self.name.clone()]).await?;
            }
            None => {
                info!("Creating container '{}' from image '{}'", self.name, self.image);
                execute_docker_command(&self.run_args()).await?;
            }
        }
        Ok(())
    }

    #[instrument(skip(self), fields(container = %self.name))]
    async fn copy_to_container(&self, local: &Path, remote: &str) -> Result<(), ContainerError> {
        if let Some(parent) = remote_parent(remote) {
            execute_docker_command(&[
                "exec".to_string(),
                self.name.clone(),
                "mkdir".to_string(),
                "-p".to_string(),
                parent.to_string(),
            ])
            .await?;
        }

        execute_docker_command(&[
            "cp".to_string(),
            local.display().to_string(),
            format!("{}:{}", self.name, remote),
        ])
        .await?;
        Ok(())
    }

    async fn stop_container(&self) -> Result<(), ContainerError> {
        if self.inspect_running().await != Some(true) {
            return Err(ContainerError::NotRunning(self.name.clone()));
        }
        execute_docker_command(&["stop".to_string(), self.name.clone()]).await?;
        Ok(())
    }
}
