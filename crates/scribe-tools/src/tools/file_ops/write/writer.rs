//! Core write logic and file operations

use super::types::FileWriteTool;
use super::validation::{ValidationError, WriteRequest};
use scribe_core::tools::base::FileSystemTool;
use scribe_core::tools::types::ToolResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// What happened to a write request
#[derive(Debug)]
pub enum WriteOutcome {
    /// The file is on disk
    Written {
        relative_path: String,
        local_path: PathBuf,
    },
    /// The arguments were refused; nothing was written
    ValidationFailed(ValidationError),
    /// Creating the folder or writing the file failed
    IoFailed(std::io::Error),
}

impl WriteOutcome {
    /// Message reported back to the model
    pub fn message(&self) -> String {
        match self {
            Self::Written { relative_path, .. } => {
                format!("File written successfully at {}.", relative_path)
            }
            Self::ValidationFailed(err) => err.to_string(),
            Self::IoFailed(err) => format!("Error writing file: {}", err),
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    pub(crate) fn into_result(self, call_id: &str, tool_name: &str) -> ToolResult {
        let message = self.message();
        let result = match &self {
            Self::Written {
                relative_path,
                local_path,
            } => ToolResult::new(call_id, tool_name, message)
                .with_metadata("relative_path", relative_path.as_str())
                .with_metadata("local_path", local_path.display().to_string()),
            Self::ValidationFailed(_) | Self::IoFailed(_) => {
                ToolResult::failure(call_id, tool_name, message)
            }
        };
        result.with_halt_loop(false)
    }
}

impl From<ValidationError> for WriteOutcome {
    fn from(err: ValidationError) -> Self {
        Self::ValidationFailed(err)
    }
}

impl FileWriteTool {
    /// Local path a request resolves to, before any containment check
    pub(crate) fn local_path(&self, request: &WriteRequest) -> PathBuf {
        let dir = if request.folder.is_empty() {
            self.sandbox_root.clone()
        } else {
            self.sandbox_root.join(&request.folder)
        };
        dir.join(&request.filename)
    }

    /// Whether a symlink resolves to an existing path under the sandbox root
    async fn link_target_within_root(&self, link: &Path) -> bool {
        match (
            fs::canonicalize(link).await,
            fs::canonicalize(&self.sandbox_root).await,
        ) {
            (Ok(target), Ok(root)) => target.starts_with(root),
            _ => false,
        }
    }

    /// Write a validated request under the sandbox root
    pub(crate) async fn write_request(&self, request: &WriteRequest) -> WriteOutcome {
        if let Err(err) = fs::create_dir_all(&self.sandbox_root).await {
            return WriteOutcome::IoFailed(err);
        }

        let local_path = self.local_path(request);
        // Checked before any folder is created so an escaping symlink leaves no trace
        if !self.is_within_root(&local_path) {
            return ValidationError::EscapesSandbox.into();
        }

        if let Some(dir) = local_path.parent() {
            if let Err(err) = fs::create_dir_all(dir).await {
                return WriteOutcome::IoFailed(err);
            }
        }

        // The folder now exists and is fully canonicalizable
        if !self.is_within_root(&local_path) {
            return ValidationError::EscapesSandbox.into();
        }

        // Writing follows a symlinked target, so its destination must stay inside too
        if let Ok(meta) = fs::symlink_metadata(&local_path).await {
            if meta.file_type().is_symlink() && !self.link_target_within_root(&local_path).await {
                return ValidationError::EscapesSandbox.into();
            }
        }

        if let Err(err) = fs::write(&local_path, request.content.as_bytes()).await {
            return WriteOutcome::IoFailed(err);
        }

        debug!(
            path = %local_path.display(),
            bytes = request.content.len(),
            "File written"
        );
        WriteOutcome::Written {
            relative_path: request.relative_path(),
            local_path,
        }
    }
}
