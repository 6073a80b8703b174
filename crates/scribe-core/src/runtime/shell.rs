//! Local interactive shell session

use async_trait::async_trait;
use parking_lot::Mutex;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tracing::{debug, info, warn};

/// Errors raised by shell sessions
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("shell session is not connected")]
    NotConnected,

    #[error("failed to spawn shell '{shell}': {source}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shell I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Output collected from a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    /// Everything printed since the last command was sent
    pub full: String,
    /// Only what arrived since the previous read
    pub partial: String,
}

/// A long-lived shell that commands are fed into one at a time
#[async_trait]
pub trait InteractiveSession: Send {
    /// Start the underlying shell process
    async fn connect(&mut self) -> Result<(), ShellError>;

    /// Send one command line
    async fn send_command(&mut self, command: &str) -> Result<(), ShellError>;

    /// Collect output until nothing new arrives for `idle`
    async fn read_output(&mut self, idle: Duration) -> Result<ShellOutput, ShellError>;

    /// Terminate the shell
    async fn close(&mut self) -> Result<(), ShellError>;

    fn is_connected(&self) -> bool;
}

/// Shell session backed by a local child process
pub struct LocalInteractiveSession {
    shell: String,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    output: Arc<Mutex<String>>,
    command_start: usize,
    read_pos: usize,
}

impl LocalInteractiveSession {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            child: None,
            stdin: None,
            output: Arc::new(Mutex::new(String::new())),
            command_start: 0,
            read_pos: 0,
        }
    }

    fn spawn_reader<R>(pipe: R, sink: Arc<Mutex<String>>)
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        tokio::spawn(async move {
            let mut lines = BufReader::new(pipe).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let mut buf = sink.lock();
                buf.push_str(&line);
                buf.push('\n');
            }
        });
    }
}

impl std::fmt::Debug for LocalInteractiveSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalInteractiveSession")
            .field("shell", &self.shell)
            .field("connected", &self.child.is_some())
            .finish()
    }
}

#[async_trait]
impl InteractiveSession for LocalInteractiveSession {
    async fn connect(&mut self) -> Result<(), ShellError> {
        if self.child.is_some() {
            self.close().await?;
        }

        let mut child = Command::new(&self.shell)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ShellError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        self.output = Arc::new(Mutex::new(String::new()));
        self.command_start = 0;
        self.read_pos = 0;

        if let Some(stdout) = child.stdout.take() {
            Self::spawn_reader(stdout, self.output.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            Self::spawn_reader(stderr, self.output.clone());
        }

        self.stdin = child.stdin.take();
        info!("Local shell '{}' connected (PID: {:?})", self.shell, child.id());
        self.child = Some(child);
        Ok(())
    }

    async fn send_command(&mut self, command: &str) -> Result<(), ShellError> {
        let stdin = self.stdin.as_mut().ok_or(ShellError::NotConnected)?;
        debug!("Sending command to local shell: {}", command);

        let len = self.output.lock().len();
        self.command_start = len;
        self.read_pos = len;

        stdin.write_all(command.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
        stdin.flush().await?;
        Ok(())
    }

    async fn read_output(&mut self, idle: Duration) -> Result<ShellOutput, ShellError> {
        if self.child.is_none() {
            return Err(ShellError::NotConnected);
        }

        let poll = Duration::from_millis(20).min(idle);
        let mut seen = self.output.lock().len();
        let mut quiet = Duration::ZERO;
        while quiet < idle {
            tokio::time::sleep(poll).await;
            let len = self.output.lock().len();
            if len == seen {
                quiet += poll;
            } else {
                seen = len;
                quiet = Duration::ZERO;
            }
        }

        let buf = self.output.lock();
        let out = ShellOutput {
            full: buf[self.command_start..].to_string(),
            partial: buf[self.read_pos..].to_string(),
        };
        self.read_pos = buf.len();
        Ok(out)
    }

    async fn close(&mut self) -> Result<(), ShellError> {
        self.stdin = None;
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill().await {
                warn!("Failed to kill local shell '{}': {}", self.shell, e);
            }
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.child.is_some()
    }
}
