//! Argument validation for `write_file`

use scribe_core::tools::ToolCall;
use std::path::{Component, Path};

/// Why a write request was refused
///
/// The messages are returned verbatim to the model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Filename, folder, or content not provided.")]
    MissingArguments,

    #[error("File name should not contain '/'.")]
    SeparatorInFilename,

    #[error("Folder path should not contain '..'.")]
    ParentInFolder,

    #[error("File name should be a plain file name.")]
    NotPlainFilename,

    #[error("Folder path should be relative to the working directory.")]
    AbsoluteFolder,

    #[error("Resolved path escapes the working directory.")]
    EscapesSandbox,
}

/// A validated `write_file` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub filename: String,
    /// Folder under the sandbox root; empty means the root itself
    pub folder: String,
    pub content: String,
}

/// Prefix of every container-side path
const CONTAINER_ROOT: &str = "/root/";

impl WriteRequest {
    /// Argument names the tool understands
    pub const KNOWN_ARGUMENTS: [&'static str; 3] = ["filename", "folder", "content"];

    /// Validate the arguments of a call, first failure wins
    pub fn from_call(call: &ToolCall) -> Result<Self, ValidationError> {
        let non_empty = |key: &str| call.get_string(key).filter(|v| !v.is_empty());

        let (Some(filename), Some(content), Some(folder)) = (
            non_empty("filename"),
            non_empty("content"),
            non_empty("folder"),
        ) else {
            return Err(ValidationError::MissingArguments);
        };

        Self::new(filename, folder, content)
    }

    /// Validate already extracted values
    pub fn new(
        filename: impl Into<String>,
        folder: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let filename = filename.into();
        let folder = folder.into();
        let content = content.into();

        if filename.is_empty() || folder.is_empty() || content.is_empty() {
            return Err(ValidationError::MissingArguments);
        }
        if filename.contains('/') {
            return Err(ValidationError::SeparatorInFilename);
        }
        if folder.contains("..") {
            return Err(ValidationError::ParentInFolder);
        }
        if !is_plain_file_name(&filename) {
            return Err(ValidationError::NotPlainFilename);
        }

        let folder = if folder == "." { String::new() } else { folder };
        if Path::new(&folder)
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
        {
            return Err(ValidationError::AbsoluteFolder);
        }

        Ok(Self {
            filename,
            folder,
            content,
        })
    }

    /// Path relative to the sandbox root, as reported back to the model
    pub fn relative_path(&self) -> String {
        if self.folder.is_empty() {
            self.filename.clone()
        } else {
            format!("{}/{}", self.folder.trim_end_matches('/'), self.filename)
        }
    }

    /// Destination inside the container
    pub fn container_path(&self) -> String {
        format!("{}{}", CONTAINER_ROOT, self.relative_path())
    }
}

/// A single normal path component: no backslash, no drive or root syntax
fn is_plain_file_name(name: &str) -> bool {
    if name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}
