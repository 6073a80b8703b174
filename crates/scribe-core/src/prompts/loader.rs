//! Prompt loading and rendering

use crate::error::{ScribeError, ScribeResult};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::debug;

/// Prompt used to feed a tool's result back into the conversation
pub const TOOL_RESPONSE_PROMPT: &str = "fw.tool_response.md";

fn embedded(name: &str) -> Option<&'static str> {
    match name {
        TOOL_RESPONSE_PROMPT => Some(include_str!("../../prompts/fw.tool_response.md")),
        _ => None,
    }
}

/// Loads prompt templates from an override directory or the embedded set
#[derive(Debug, Clone, Default)]
pub struct PromptLoader {
    prompts_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Loader that only knows the embedded prompts
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that checks `dir` before the embedded prompts
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            prompts_dir: Some(dir.into()),
        }
    }

    /// Load the raw template text for `name`
    pub fn load(&self, name: &str) -> ScribeResult<String> {
        if let Some(dir) = &self.prompts_dir {
            let path = dir.join(name);
            if path.is_file() {
                debug!("Loading prompt override {}", path.display());
                return std::fs::read_to_string(&path)
                    .map_err(|e| ScribeError::io_at(&e, path.display().to_string()));
            }
        }

        embedded(name)
            .map(str::to_string)
            .ok_or_else(|| ScribeError::prompt(name, "prompt not found"))
    }

    /// Load `name` and substitute `vars` into it
    pub fn read_prompt(&self, name: &str, vars: &[(&str, &str)]) -> ScribeResult<String> {
        let template = self.load(name)?;
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        Ok(render(&template, &vars))
    }
}

/// `{{name}}`, optionally padded with spaces inside the braces
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is a valid regex")
});

/// Replace `{{name}}` placeholders; unknown placeholders are left untouched
pub fn render(template: &str, vars: &HashMap<&str, &str>) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => (*value).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
