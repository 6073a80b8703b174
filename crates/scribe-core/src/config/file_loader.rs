//! File-based configuration loading

use super::agent_config::AgentConfig;
use super::env_loader::apply_env_overrides;
use crate::error::{ScribeError, ScribeResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default user-level configuration file: `<config_dir>/scribe/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scribe").join("config.toml"))
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> ScribeResult<AgentConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ScribeError::io_at(&e, path.display().to_string()))?;

    AgentConfig::from_toml_str(&text).map_err(|e| {
        ScribeError::config_at(format!("Invalid TOML: {}", e), path.display().to_string())
    })
}

/// Load configuration with the standard precedence
///
/// An explicit path must exist. Without one, the user-level file is used if
/// present, and the defaults otherwise. Environment overrides apply last.
pub fn load_config(path: Option<&Path>) -> ScribeResult<AgentConfig> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(user_path) => {
                debug!("Loading user configuration from {}", user_path.display());
                load_from_file(&user_path)?
            }
            None => AgentConfig::default(),
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}
