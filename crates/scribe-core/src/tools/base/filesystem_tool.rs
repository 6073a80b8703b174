//! File system helper trait for tools

use super::tool_trait::Tool;
use std::path::{Component, Path, PathBuf};

/// Helper trait for tools confined to a sandbox root.
///
/// # Security
///
/// [`FileSystemTool::is_within_root`] resolves symlinks of the existing
/// part of a path and checks the result against the canonical root, so a
/// symlinked folder cannot carry a write outside the sandbox. A dangling
/// symlink cannot be resolved and is refused.
pub trait FileSystemTool: Tool {
    /// Directory every file operation is confined to
    fn sandbox_root(&self) -> &Path;

    /// Check that `path` resolves to a descendant of the sandbox root
    fn is_within_root(&self, path: &Path) -> bool {
        let root = match self.sandbox_root().canonicalize() {
            Ok(p) => p,
            Err(_) => return false,
        };

        // Canonicalize the nearest existing ancestor, then re-append the rest.
        // A dangling symlink counts as existing so that canonicalize rejects it.
        let mut existing = path.to_path_buf();
        let mut pending: Vec<PathBuf> = Vec::new();
        let resolved = loop {
            if std::fs::symlink_metadata(&existing).is_ok() {
                match existing.canonicalize() {
                    Ok(mut canonical) => {
                        for part in pending.iter().rev() {
                            canonical.push(part);
                        }
                        break canonical;
                    }
                    Err(_) => return false,
                }
            }
            match (existing.file_name(), existing.parent()) {
                (Some(name), Some(parent)) => {
                    pending.push(PathBuf::from(name));
                    existing = parent.to_path_buf();
                }
                _ => return false,
            }
        };

        // Non-existent tail components were never resolved; refuse `..` there
        if resolved
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return false;
        }

        resolved.starts_with(&root)
    }
}
