//! Schema and description for the `write_file` tool

use scribe_core::tools::types::{ToolParameter, ToolSchema};

pub(crate) const TOOL_NAME: &str = "write_file";

pub(crate) const DESCRIPTION: &str = "Write a text file into the working directory. \
The file is also copied into the execution container, so shell commands can use it. \
An existing file with the same name is overwritten.";

pub(crate) fn parameters() -> Vec<ToolParameter> {
    vec![
        ToolParameter::string("filename", "Name of the file, without any '/'"),
        ToolParameter::string(
            "folder",
            "Folder relative to the working directory; use '.' for the directory itself",
        ),
        ToolParameter::string("content", "Full text content of the file"),
    ]
}

pub(crate) fn schema() -> ToolSchema {
    ToolSchema::new(TOOL_NAME, DESCRIPTION, parameters())
}
