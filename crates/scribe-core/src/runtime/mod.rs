//! Runtime collaborators driven by tools
//!
//! - [`ContainerManager`]: starts the execution container and copies files in
//! - [`InteractiveSession`]: a long-lived local shell
//! - [`RuntimeFactory`]: builds both, so an agent can swap in other backends

mod container;
pub mod docker;
mod factory;
mod shell;

pub use container::{ContainerError, ContainerManager};
pub use docker::DockerContainerManager;
pub use factory::{DefaultRuntime, RuntimeFactory};
pub use shell::{InteractiveSession, LocalInteractiveSession, ShellError, ShellOutput};

#[cfg(test)]
pub use container::MockContainerManager;
