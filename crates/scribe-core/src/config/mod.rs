//! Configuration for Scribe agents
//!
//! Configuration is read from a TOML file and then overridden by `SCRIBE_*`
//! environment variables. Every field has a default, so an empty file is a
//! valid configuration.

mod agent_config;
mod env_loader;
mod file_loader;
mod logging_config;

pub use agent_config::{AgentConfig, VolumeMount};
pub use env_loader::apply_env_overrides;
pub use file_loader::{default_config_path, load_config, load_from_file};
pub use logging_config::LoggingConfig;
