//! Display management for tool output

use colored::*;

/// Styled console printer used by tools
///
/// A disabled manager swallows everything, which keeps tests and headless
/// runs quiet without touching call sites.
#[derive(Debug, Clone)]
pub struct DisplayManager {
    enabled: bool,
}

impl DisplayManager {
    /// Create a display manager that prints to stdout
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a display manager that prints nothing
    pub fn silent() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print the padded "<agent>: Using tool '<tool>'" banner
    pub fn print_tool_banner(&self, heading: &str) {
        if !self.enabled {
            return;
        }
        println!();
        println!("{}", format!(" {} ", heading).blue().bold().on_white());
        println!();
    }

    /// Print one tool argument as `Nice key: value`
    pub fn print_argument(&self, key: &str, value: &str) {
        if !self.enabled {
            return;
        }
        let label = format!("{}: ", nice_key(key)).bright_cyan().bold();
        if value.contains('\n') {
            println!("{}", label);
            println!();
            println!("{}", value.bright_cyan());
            println!();
        } else {
            println!("{}{}", label, value.bright_cyan());
        }
    }

    /// Print a bold informational notice
    pub fn print_notice(&self, message: &str) {
        if self.enabled {
            println!("{}", message.blue().bold());
        }
    }

    /// Print a bold red error line
    pub fn print_error(&self, message: &str) {
        if self.enabled {
            println!("{}", message.red().bold());
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn an argument key into a label: `file_name` becomes `File name`
pub fn nice_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_key() {
        assert_eq!(nice_key("filename"), "Filename");
        assert_eq!(nice_key("file_name"), "File name");
        assert_eq!(nice_key(""), "");
    }

    #[test]
    fn test_silent_display() {
        let display = DisplayManager::silent();
        assert!(!display.is_enabled());
        // Nothing to observe; these must simply not panic
        display.print_tool_banner("Agent 0: Using tool 'write_file'");
        display.print_argument("content", "line one\nline two");
        display.print_error("oops");
    }
}
