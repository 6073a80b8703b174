//! Prompt templates
//!
//! Templates are markdown files with `{{name}}` placeholders. A file in the
//! configured prompts directory wins over the embedded copy of the same name.

mod loader;

pub use loader::{PromptLoader, TOOL_RESPONSE_PROMPT, render};
